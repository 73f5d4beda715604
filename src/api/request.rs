//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/sweep` endpoints and their conversion to domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{EmployerCostOptions, SweepRequest};
use crate::config::ParameterTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationProfile, MealVoucherPlan, Percent, SpecialContributionRegime};
use crate::overview::Period;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Tax year of the parameter table; the latest loaded year when absent.
    #[serde(default)]
    pub tax_year: Option<u16>,
    /// The employee's compensation.
    pub profile: ProfileRequest,
    /// Structural reduction category of the employer.
    #[serde(default)]
    pub category: Option<u8>,
    /// Statutory employer social security rate in percent.
    #[serde(default)]
    pub employer_social_rate_pct: Option<Percent>,
    /// Period of the overview amounts.
    #[serde(default)]
    pub period: Period,
}

/// Request body for the `/sweep` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRequestBody {
    /// Tax year of the parameter table; the latest loaded year when absent.
    #[serde(default)]
    pub tax_year: Option<u16>,
    /// The employee's compensation at the centre of the sweep.
    pub profile: ProfileRequest,
    /// Structural reduction category of the employer.
    #[serde(default)]
    pub category: Option<u8>,
    /// Statutory employer social security rate in percent.
    #[serde(default)]
    pub employer_social_rate_pct: Option<Percent>,
    /// Distance below and above the gross monthly salary.
    pub range: Decimal,
    /// Number of points.
    pub steps: usize,
}

impl SweepRequestBody {
    /// The sweep range and resolution.
    pub fn sweep(&self) -> SweepRequest {
        SweepRequest {
            range: self.range,
            steps: self.steps,
        }
    }
}

/// Compensation profile in a request.
///
/// Meal vouchers are given either as yearly totals or as a per-day plan,
/// never both. Insurance rates are percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    /// Gross monthly salary.
    pub gross_monthly_salary: Decimal,
    /// Part-time ratio, 1 for full time.
    #[serde(default)]
    pub work_fraction: Option<Decimal>,
    /// Employer meal voucher share per year.
    #[serde(default)]
    pub meal_voucher_employer_yearly: Option<Decimal>,
    /// Employee meal voucher share per year.
    #[serde(default)]
    pub meal_voucher_employee_yearly: Option<Decimal>,
    /// Per-day meal voucher plan.
    #[serde(default)]
    pub meal_vouchers: Option<MealVoucherPlan>,
    /// Eco vouchers per year.
    #[serde(default)]
    pub eco_voucher_yearly: Option<Decimal>,
    /// Employer group insurance contribution in percent of gross.
    #[serde(default)]
    pub group_insurance_employer_pct: Option<Percent>,
    /// Work injury insurance premium in percent of gross.
    #[serde(default)]
    pub work_injury_insurance_pct: Option<Percent>,
    /// Monthly expense allowance.
    #[serde(default)]
    pub monthly_expense_allowance: Option<Decimal>,
    /// Household regime for the special contribution.
    #[serde(default)]
    pub special_contribution_regime: SpecialContributionRegime,
}

impl ProfileRequest {
    /// Converts the request into a validated profile.
    ///
    /// A meal voucher plan is turned into yearly totals with the limits of
    /// `table`.
    pub fn to_profile(&self, table: &ParameterTable) -> EngineResult<CompensationProfile> {
        let work_fraction = self.work_fraction.unwrap_or(Decimal::ONE);

        let mut builder = CompensationProfile::builder(self.gross_monthly_salary)
            .work_fraction(work_fraction)
            .regime(self.special_contribution_regime);

        match &self.meal_vouchers {
            Some(_)
                if self.meal_voucher_employer_yearly.is_some()
                    || self.meal_voucher_employee_yearly.is_some() =>
            {
                return Err(EngineError::invalid_profile(
                    "meal_vouchers",
                    "give either a per-day plan or yearly amounts, not both",
                ));
            }
            Some(plan) => {
                let amounts = plan.yearly_amounts(table.meal_vouchers(), work_fraction)?;
                builder = builder.meal_vouchers(amounts.employer_yearly, amounts.employee_yearly);
            }
            None => {
                builder = builder.meal_vouchers(
                    self.meal_voucher_employer_yearly.unwrap_or(Decimal::ZERO),
                    self.meal_voucher_employee_yearly.unwrap_or(Decimal::ZERO),
                );
            }
        }

        if let Some(yearly) = self.eco_voucher_yearly {
            builder = builder.eco_vouchers(yearly);
        }
        if let Some(pct) = self.group_insurance_employer_pct {
            builder = builder.group_insurance(pct.to_fraction());
        }
        if let Some(pct) = self.work_injury_insurance_pct {
            builder = builder.work_injury_insurance(pct.to_fraction());
        }
        if let Some(allowance) = self.monthly_expense_allowance {
            builder = builder.monthly_expense_allowance(allowance);
        }

        builder.build()
    }
}

/// Builds the employer options from the optional request fields.
pub(crate) fn employer_options(
    table: &ParameterTable,
    category: Option<u8>,
    employer_social_rate_pct: Option<Percent>,
) -> EngineResult<EmployerCostOptions> {
    let mut options = EmployerCostOptions::for_table(table)?;
    if let Some(category) = category {
        options.category = category;
    }
    if let Some(pct) = employer_social_rate_pct {
        options.employer_social_rate = pct.to_fraction();
    }
    Ok(options)
}
