//! Employer cost calculation.
//!
//! Adds the employer social security contribution, insurance premiums and
//! benefits to the gross salary and deducts the structural reduction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ParameterTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationProfile, EmployerCostResult, Fraction, NetPayResult};

use super::rounding::round2;
use super::structural_reduction::{DEFAULT_REDUCTION_CATEGORY, structural_reduction_monthly};

/// Employer-level settings for the cost calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCostOptions {
    /// Structural reduction category.
    pub category: u8,
    /// Statutory employer social security rate.
    pub employer_social_rate: Fraction,
}

impl EmployerCostOptions {
    /// Options for category 1 using the employer rate of a parameter table.
    pub fn for_table(table: &ParameterTable) -> EngineResult<Self> {
        Ok(Self {
            category: DEFAULT_REDUCTION_CATEGORY,
            employer_social_rate: Fraction::new(table.social_security().employer_rate)?,
        })
    }
}

impl Default for EmployerCostOptions {
    fn default() -> Self {
        Self {
            category: DEFAULT_REDUCTION_CATEGORY,
            employer_social_rate: Fraction::new_unchecked(Decimal::new(25, 2)),
        }
    }
}

/// Calculates the total employer cost for a profile.
///
/// The structural reduction is capped at the employer contribution, so the
/// reported `rsz_werkgever` never goes negative. `net_pay` must come from the
/// same profile; its amounts do not enter the cost.
///
/// # Errors
///
/// Returns `InvalidInput` when `net_pay` was computed for a different gross
/// salary, and `CategoryNotFound` for a category the table does not define.
///
/// # Examples
///
/// ```no_run
/// use bediende_payroll::calculation::{compute_employer_cost, compute_net_pay, EmployerCostOptions};
/// use bediende_payroll::config::ConfigLoader;
/// use bediende_payroll::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let profile = CompensationProfile::builder(Decimal::new(2000, 0)).build().unwrap();
/// let net = compute_net_pay(loader.table(), &profile).unwrap();
/// let cost = compute_employer_cost(loader.table(), &profile, &net, EmployerCostOptions::default()).unwrap();
/// assert_eq!(cost.total_cost_monthly, Decimal::new(208775, 2));
/// ```
pub fn compute_employer_cost(
    table: &ParameterTable,
    profile: &CompensationProfile,
    net_pay: &NetPayResult,
    options: EmployerCostOptions,
) -> EngineResult<EmployerCostResult> {
    let gross_yearly = profile.gross_yearly_salary();
    if net_pay.gross_yearly != round2(gross_yearly) {
        return Err(EngineError::invalid_input(
            "net_pay",
            format!(
                "computed for gross {} but profile has gross {}",
                net_pay.gross_yearly,
                round2(gross_yearly)
            ),
        ));
    }

    let employer_contribution = options.employer_social_rate.of(gross_yearly);
    let group_insurance = profile.group_insurance_employer().of(gross_yearly);
    let work_injury_insurance = profile.work_injury_insurance().of(gross_yearly);

    let reduction_monthly = structural_reduction_monthly(
        table.structural_reduction(),
        options.category,
        profile.gross_monthly_salary(),
        profile.work_fraction(),
    )?;
    let reduction = (reduction_monthly * Decimal::from(12)).min(employer_contribution);

    let total_yearly = gross_yearly
        + employer_contribution
        + group_insurance
        + work_injury_insurance
        + profile.meal_voucher_employer_yearly()
        + profile.eco_voucher_yearly()
        + profile.yearly_expense_allowance()
        - reduction;

    Ok(EmployerCostResult {
        employer_social_contribution: round2(employer_contribution - reduction),
        group_insurance: round2(group_insurance),
        work_injury_insurance: round2(work_injury_insurance),
        meal_vouchers_employer: round2(profile.meal_voucher_employer_yearly()),
        eco_vouchers: round2(profile.eco_voucher_yearly()),
        expense_allowance: round2(profile.yearly_expense_allowance()),
        structural_reduction_yearly: round2(reduction),
        total_cost_yearly: round2(total_yearly),
        total_cost_monthly: round2(total_yearly / Decimal::from(12)),
    })
}
