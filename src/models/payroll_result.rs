//! Result records of the net pay and employer cost calculators.
//!
//! Both records are flat sets of named amounts, rounded to cents. Field names
//! serialize to the Dutch payroll terms downstream reports use.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net pay and purchasing power for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPayResult {
    /// Gross monthly salary.
    #[serde(rename = "bruto_maand")]
    pub gross_monthly: Decimal,
    /// Gross yearly salary.
    #[serde(rename = "bruto_jaar")]
    pub gross_yearly: Decimal,
    /// Employee social security contribution after the social wage bonus.
    #[serde(rename = "rsz_werknemer")]
    pub employee_social_contribution: Decimal,
    /// Social wage bonus, parts A and B combined.
    #[serde(rename = "sociale_werkbonus")]
    pub social_wage_bonus: Decimal,
    /// Fiscal wage bonus, parts A and B combined.
    #[serde(rename = "fiscale_werkbonus")]
    pub fiscal_wage_bonus: Decimal,
    /// Flat-rate professional expense deduction.
    #[serde(rename = "kostenforfait")]
    pub expense_deduction: Decimal,
    /// Taxable income.
    #[serde(rename = "belastbaar_inkomen")]
    pub taxable_income: Decimal,
    /// Personal income tax after the fiscal wage bonus.
    #[serde(rename = "personenbelasting")]
    pub income_tax: Decimal,
    /// Special social security contribution per year.
    #[serde(rename = "bbsz")]
    pub special_contribution: Decimal,
    /// Net pay per month.
    #[serde(rename = "nettoloon_maand")]
    pub net_monthly: Decimal,
    /// Net pay per year.
    #[serde(rename = "nettoloon_jaar")]
    pub net_yearly: Decimal,
    /// Purchasing power per month.
    #[serde(rename = "koopkracht_maand")]
    pub purchasing_power_monthly: Decimal,
    /// Purchasing power per year.
    #[serde(rename = "koopkracht_jaar")]
    pub purchasing_power_yearly: Decimal,
}

/// Total employer cost for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCostResult {
    /// Employer social security contribution after the structural reduction.
    #[serde(rename = "rsz_werkgever")]
    pub employer_social_contribution: Decimal,
    /// Employer group insurance contribution.
    #[serde(rename = "gv_werkgever")]
    pub group_insurance: Decimal,
    /// Work injury insurance premium.
    #[serde(rename = "ao_verzekering")]
    pub work_injury_insurance: Decimal,
    /// Employer share of meal vouchers.
    #[serde(rename = "maaltijdcheques_wg")]
    pub meal_vouchers_employer: Decimal,
    /// Eco vouchers.
    #[serde(rename = "ecocheques")]
    pub eco_vouchers: Decimal,
    /// Expense allowance per year.
    #[serde(rename = "kosten_eigen")]
    pub expense_allowance: Decimal,
    /// Structural reduction actually deducted, per year.
    #[serde(rename = "structurele_vermindering_jaar")]
    pub structural_reduction_yearly: Decimal,
    /// Total employer cost per year.
    #[serde(rename = "totaal_loonkost_jaar")]
    pub total_cost_yearly: Decimal,
    /// Total employer cost per month.
    #[serde(rename = "totaal_loonkost_maand")]
    pub total_cost_monthly: Decimal,
}
