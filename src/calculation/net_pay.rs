//! Net pay calculation.
//!
//! Composes the employee social security contribution, the wage bonus, the
//! flat-rate expense deduction, income tax and the special contribution into
//! net pay and purchasing power.

use rust_decimal::Decimal;

use crate::config::ParameterTable;
use crate::error::EngineResult;
use crate::models::{CompensationProfile, NetPayResult};

use super::income_tax::personal_income_tax;
use super::rounding::round2;
use super::special_contribution::special_contribution;
use super::wage_bonus::{fiscal_wage_bonus, social_wage_bonus};

/// Calculates net pay and purchasing power for a profile.
///
/// Steps, all on yearly amounts unless noted:
///
/// 1. Base employee contribution: gross × employee rate.
/// 2. Wage bonus parts from the gross monthly wage; the social bonus is
///    subtracted from the base contribution.
/// 3. Expense deduction: `min(cap, rate × (gross − contribution))`.
/// 4. Tax on `gross − contribution − deduction`, minus the fiscal bonus.
///    The difference is not floored at zero.
/// 5. Net = gross − contribution − tax − special contribution − employee
///    meal voucher share.
/// 6. Purchasing power = net + employer meal voucher share + eco vouchers +
///    yearly expense allowance.
///
/// Every output is rounded to cents; intermediate values are not.
///
/// # Errors
///
/// Only fails if the parameter table produces a negative taxable income,
/// which cannot happen for a validated profile and the bundled tables.
pub fn compute_net_pay(
    table: &ParameterTable,
    profile: &CompensationProfile,
) -> EngineResult<NetPayResult> {
    let ss = table.social_security();
    let gross_monthly = profile.gross_monthly_salary();
    let gross_yearly = profile.gross_yearly_salary();
    let twelve = Decimal::from(12);

    let base_contribution = gross_yearly * ss.employee_rate;

    let social_parts = social_wage_bonus(table.wage_bonus(), gross_monthly);
    let social_bonus = social_parts.total();
    let fiscal_bonus = fiscal_wage_bonus(table.wage_bonus(), &social_parts).total();

    let employee_contribution = base_contribution - social_bonus;

    let expense_deduction = ss
        .expense_deduction_cap
        .min(ss.expense_deduction_rate * (gross_yearly - employee_contribution));
    let taxable_income = gross_yearly - employee_contribution - expense_deduction;

    let income_tax = personal_income_tax(table.income_tax(), taxable_income)? - fiscal_bonus;

    let special = special_contribution(
        table.special_contribution(),
        gross_monthly,
        profile.special_contribution_regime(),
    )
    .yearly;

    let net_yearly = gross_yearly
        - employee_contribution
        - income_tax
        - special
        - profile.meal_voucher_employee_yearly();
    let net_monthly = net_yearly / twelve;

    let purchasing_power_yearly = net_yearly
        + profile.meal_voucher_employer_yearly()
        + profile.eco_voucher_yearly()
        + profile.yearly_expense_allowance();
    let purchasing_power_monthly = purchasing_power_yearly / twelve;

    Ok(NetPayResult {
        gross_monthly: round2(gross_monthly),
        gross_yearly: round2(gross_yearly),
        employee_social_contribution: round2(employee_contribution),
        social_wage_bonus: round2(social_bonus),
        fiscal_wage_bonus: round2(fiscal_bonus),
        expense_deduction: round2(expense_deduction),
        taxable_income: round2(taxable_income),
        income_tax: round2(income_tax),
        special_contribution: round2(special),
        net_monthly: round2(net_monthly),
        net_yearly: round2(net_yearly),
        purchasing_power_monthly: round2(purchasing_power_monthly),
        purchasing_power_yearly: round2(purchasing_power_yearly),
    })
}
