//! Compensation profile of a salaried employee.
//!
//! The profile holds every employee-level input the net pay and employer
//! cost calculators consume. It is validated once, at construction, and is
//! immutable afterwards.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::rate::Fraction;

/// Household regime that selects the special social security contribution formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialContributionRegime {
    /// Single-person taxation.
    #[default]
    #[serde(alias = "individueel")]
    Individual,
    /// Joint taxation, partner has professional income.
    #[serde(alias = "gemeenschappelijk_met_inkomen")]
    JointWithIncome,
    /// Joint taxation, partner has no professional income.
    #[serde(alias = "gemeenschappelijk_zonder_inkomen")]
    JointWithoutIncome,
}

impl SpecialContributionRegime {
    /// Returns the snake_case identifier used in requests.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::JointWithIncome => "joint_with_income",
            Self::JointWithoutIncome => "joint_without_income",
        }
    }
}

impl fmt::Display for SpecialContributionRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialContributionRegime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" | "individueel" => Ok(Self::Individual),
            "joint_with_income" | "gemeenschappelijk_met_inkomen" => Ok(Self::JointWithIncome),
            "joint_without_income" | "gemeenschappelijk_zonder_inkomen" => {
                Ok(Self::JointWithoutIncome)
            }
            other => Err(EngineError::invalid_profile(
                "special_contribution_regime",
                format!("unrecognized regime '{}'", other),
            )),
        }
    }
}

/// Validated compensation inputs for one bediende.
///
/// Build one with [`CompensationProfile::builder`].
///
/// # Example
///
/// ```
/// use bediende_payroll::models::{CompensationProfile, SpecialContributionRegime};
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile::builder(Decimal::new(3000, 0))
///     .work_fraction(Decimal::new(8, 1))
///     .regime(SpecialContributionRegime::JointWithIncome)
///     .build()
///     .unwrap();
///
/// assert_eq!(profile.gross_yearly_salary(), Decimal::new(36000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompensationProfile {
    gross_monthly_salary: Decimal,
    work_fraction: Decimal,
    meal_voucher_employer_yearly: Decimal,
    meal_voucher_employee_yearly: Decimal,
    eco_voucher_yearly: Decimal,
    group_insurance_employer: Fraction,
    work_injury_insurance: Fraction,
    monthly_expense_allowance: Decimal,
    special_contribution_regime: SpecialContributionRegime,
}

impl CompensationProfile {
    /// Starts a builder with the given gross monthly salary and all other
    /// inputs at their defaults (full-time, no benefits, individual regime).
    pub fn builder(gross_monthly_salary: Decimal) -> CompensationProfileBuilder {
        CompensationProfileBuilder {
            gross_monthly_salary,
            work_fraction: Decimal::ONE,
            meal_voucher_employer_yearly: Decimal::ZERO,
            meal_voucher_employee_yearly: Decimal::ZERO,
            eco_voucher_yearly: Decimal::ZERO,
            group_insurance_employer: Fraction::ZERO,
            work_injury_insurance: Fraction::ZERO,
            monthly_expense_allowance: Decimal::ZERO,
            special_contribution_regime: SpecialContributionRegime::Individual,
        }
    }

    /// Returns a builder pre-filled with this profile's values.
    pub fn to_builder(&self) -> CompensationProfileBuilder {
        CompensationProfileBuilder {
            gross_monthly_salary: self.gross_monthly_salary,
            work_fraction: self.work_fraction,
            meal_voucher_employer_yearly: self.meal_voucher_employer_yearly,
            meal_voucher_employee_yearly: self.meal_voucher_employee_yearly,
            eco_voucher_yearly: self.eco_voucher_yearly,
            group_insurance_employer: self.group_insurance_employer,
            work_injury_insurance: self.work_injury_insurance,
            monthly_expense_allowance: self.monthly_expense_allowance,
            special_contribution_regime: self.special_contribution_regime,
        }
    }

    /// Gross monthly salary.
    pub fn gross_monthly_salary(&self) -> Decimal {
        self.gross_monthly_salary
    }

    /// Gross yearly salary (twelve times the monthly salary).
    pub fn gross_yearly_salary(&self) -> Decimal {
        self.gross_monthly_salary * Decimal::from(12)
    }

    /// Part-time ratio in (0, 1].
    pub fn work_fraction(&self) -> Decimal {
        self.work_fraction
    }

    /// Employer share of meal vouchers per year.
    pub fn meal_voucher_employer_yearly(&self) -> Decimal {
        self.meal_voucher_employer_yearly
    }

    /// Employee share of meal vouchers per year.
    pub fn meal_voucher_employee_yearly(&self) -> Decimal {
        self.meal_voucher_employee_yearly
    }

    /// Eco vouchers per year.
    pub fn eco_voucher_yearly(&self) -> Decimal {
        self.eco_voucher_yearly
    }

    /// Employer group insurance contribution on annual gross.
    pub fn group_insurance_employer(&self) -> Fraction {
        self.group_insurance_employer
    }

    /// Work injury insurance premium on annual gross.
    pub fn work_injury_insurance(&self) -> Fraction {
        self.work_injury_insurance
    }

    /// Tax-exempt monthly expense allowance.
    pub fn monthly_expense_allowance(&self) -> Decimal {
        self.monthly_expense_allowance
    }

    /// Yearly expense allowance.
    pub fn yearly_expense_allowance(&self) -> Decimal {
        self.monthly_expense_allowance * Decimal::from(12)
    }

    /// Household regime for the special contribution.
    pub fn special_contribution_regime(&self) -> SpecialContributionRegime {
        self.special_contribution_regime
    }
}

/// Builder for [`CompensationProfile`]; all checks run in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CompensationProfileBuilder {
    gross_monthly_salary: Decimal,
    work_fraction: Decimal,
    meal_voucher_employer_yearly: Decimal,
    meal_voucher_employee_yearly: Decimal,
    eco_voucher_yearly: Decimal,
    group_insurance_employer: Fraction,
    work_injury_insurance: Fraction,
    monthly_expense_allowance: Decimal,
    special_contribution_regime: SpecialContributionRegime,
}

impl CompensationProfileBuilder {
    /// Sets the gross monthly salary.
    pub fn gross_monthly_salary(mut self, value: Decimal) -> Self {
        self.gross_monthly_salary = value;
        self
    }

    /// Sets the part-time ratio.
    pub fn work_fraction(mut self, value: Decimal) -> Self {
        self.work_fraction = value;
        self
    }

    /// Sets the yearly meal voucher amounts (employer share, employee share).
    pub fn meal_vouchers(mut self, employer_yearly: Decimal, employee_yearly: Decimal) -> Self {
        self.meal_voucher_employer_yearly = employer_yearly;
        self.meal_voucher_employee_yearly = employee_yearly;
        self
    }

    /// Sets the yearly eco voucher amount.
    pub fn eco_vouchers(mut self, yearly: Decimal) -> Self {
        self.eco_voucher_yearly = yearly;
        self
    }

    /// Sets the employer group insurance rate.
    pub fn group_insurance(mut self, rate: Fraction) -> Self {
        self.group_insurance_employer = rate;
        self
    }

    /// Sets the work injury insurance rate.
    pub fn work_injury_insurance(mut self, rate: Fraction) -> Self {
        self.work_injury_insurance = rate;
        self
    }

    /// Sets the monthly expense allowance.
    pub fn monthly_expense_allowance(mut self, value: Decimal) -> Self {
        self.monthly_expense_allowance = value;
        self
    }

    /// Sets the special contribution regime.
    pub fn regime(mut self, regime: SpecialContributionRegime) -> Self {
        self.special_contribution_regime = regime;
        self
    }

    /// Validates the inputs and creates the profile.
    ///
    /// Returns `InvalidProfile` naming the first offending field. Values are
    /// never clamped.
    pub fn build(self) -> EngineResult<CompensationProfile> {
        check_amount("gross_monthly_salary", self.gross_monthly_salary)?;

        if self.work_fraction <= Decimal::ZERO || self.work_fraction > Decimal::ONE {
            return Err(EngineError::invalid_profile(
                "work_fraction",
                format!("{} is outside (0, 1]", self.work_fraction),
            ));
        }

        check_amount(
            "meal_voucher_employer_yearly",
            self.meal_voucher_employer_yearly,
        )?;
        check_amount(
            "meal_voucher_employee_yearly",
            self.meal_voucher_employee_yearly,
        )?;
        check_amount("eco_voucher_yearly", self.eco_voucher_yearly)?;
        check_amount("monthly_expense_allowance", self.monthly_expense_allowance)?;

        check_insurance_rate("group_insurance_employer", self.group_insurance_employer)?;
        check_insurance_rate("work_injury_insurance", self.work_injury_insurance)?;

        Ok(CompensationProfile {
            gross_monthly_salary: self.gross_monthly_salary,
            work_fraction: self.work_fraction,
            meal_voucher_employer_yearly: self.meal_voucher_employer_yearly,
            meal_voucher_employee_yearly: self.meal_voucher_employee_yearly,
            eco_voucher_yearly: self.eco_voucher_yearly,
            group_insurance_employer: self.group_insurance_employer,
            work_injury_insurance: self.work_injury_insurance,
            monthly_expense_allowance: self.monthly_expense_allowance,
            special_contribution_regime: self.special_contribution_regime,
        })
    }
}

fn check_amount(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_profile(
            field,
            format!("{} must not be negative", value),
        ));
    }
    Ok(())
}

// Premium rates live in [0, 1).
fn check_insurance_rate(field: &str, rate: Fraction) -> EngineResult<()> {
    if rate.value() >= Decimal::ONE {
        return Err(EngineError::invalid_profile(
            field,
            format!("{} must be below 1", rate.value()),
        ));
    }
    Ok(())
}
