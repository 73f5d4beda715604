//! Configuration types for the payroll parameter tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of one tax-year directory, and the
//! [`ParameterTable`] that aggregates and validates them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about a parameter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    /// The tax year these parameters apply to.
    pub tax_year: u16,
    /// The human-readable name of the parameter set.
    pub name: String,
    /// The employee status the parameters are valid for (e.g., "bediende").
    pub employee_type: String,
    /// Where the figures were taken from.
    pub source: String,
}

/// One bracket of the progressive income tax schedule.
///
/// `upper_bound` is `None` for the open-ended top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The inclusive upper bound of the bracket, or `None` for +∞.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied inside the bracket, as a fraction.
    pub rate: Decimal,
}

/// Income tax configuration from income_tax.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxConfig {
    /// Brackets ordered by strictly increasing upper bound.
    pub brackets: Vec<TaxBracket>,
}

/// Social security rates and the flat-rate professional expense deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityConfig {
    /// Employee contribution on annual gross, as a fraction (13.07%).
    pub employee_rate: Decimal,
    /// Default employer statutory contribution, as a fraction.
    pub employer_rate: Decimal,
    /// Flat-rate professional expense deduction, as a fraction of gross minus contributions.
    pub expense_deduction_rate: Decimal,
    /// Yearly cap on the flat-rate professional expense deduction.
    pub expense_deduction_cap: Decimal,
}

/// Phase-out parameters for one part of the wage bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBonusPart {
    /// Reference wage up to which the full amount applies (S_max).
    pub wage_ceiling: Decimal,
    /// The full monthly bonus amount.
    pub amount: Decimal,
    /// Reference wage above which the bonus is zero (S_afbouw_max).
    pub phase_out_ceiling: Decimal,
    /// Reduction per euro of reference wage above the wage ceiling.
    pub phase_out_coefficient: Decimal,
}

/// Wage bonus (werkbonus) configuration from wage_bonus.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBonusConfig {
    /// Part A (low wages).
    pub part_a: WageBonusPart,
    /// Part B (very low wages).
    pub part_b: WageBonusPart,
    /// Fiscal share of social part A, as a fraction.
    pub fiscal_rate_a: Decimal,
    /// Fiscal share of social part B, as a fraction.
    pub fiscal_rate_b: Decimal,
}

/// Monthly wage thresholds used inside the contribution bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyThresholds {
    #[allow(missing_docs)]
    pub g1: Decimal,
    #[allow(missing_docs)]
    pub g2: Decimal,
    #[allow(missing_docs)]
    pub g3: Decimal,
    #[allow(missing_docs)]
    pub g4: Decimal,
    #[allow(missing_docs)]
    pub g5: Decimal,
}

/// Quarterly income thresholds that select the contribution band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyThresholds {
    #[allow(missing_docs)]
    pub k1: Decimal,
    #[allow(missing_docs)]
    pub k2: Decimal,
    #[allow(missing_docs)]
    pub k3: Decimal,
    #[allow(missing_docs)]
    pub k4: Decimal,
    #[allow(missing_docs)]
    pub k5: Decimal,
    #[allow(missing_docs)]
    pub k6: Decimal,
}

/// Amounts and rates for households where the partner also has income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointWithIncomeRates {
    /// Flat quarterly amount in the first band.
    pub zone1_quarterly: Decimal,
    /// Rate on the wage slice between g1 and g2.
    pub zone2_rate: Decimal,
    /// Minimum quarterly amount in the second band.
    pub minimum_quarterly: Decimal,
    /// Rate on the wage above g2.
    pub zone3_rate: Decimal,
    /// Quarterly ceiling.
    pub maximum_quarterly: Decimal,
}

/// Amounts and rates for households where the partner has no income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointWithoutIncomeRates {
    /// Rate on the wage slice between g1 and g2.
    pub zone2_rate: Decimal,
    /// Rate on the wage above g2.
    pub zone3_rate: Decimal,
    /// Quarterly ceiling.
    pub maximum_quarterly: Decimal,
}

/// Amounts and rates for single-person taxation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualRates {
    #[allow(missing_docs)]
    pub zone2_rate: Decimal,
    #[allow(missing_docs)]
    pub zone3_quarterly: Decimal,
    #[allow(missing_docs)]
    pub zone3_rate: Decimal,
    #[allow(missing_docs)]
    pub zone4_quarterly: Decimal,
    #[allow(missing_docs)]
    pub zone4_rate: Decimal,
    #[allow(missing_docs)]
    pub zone5_quarterly: Decimal,
    #[allow(missing_docs)]
    pub zone5_rate: Decimal,
    /// Flat quarterly amount above the last threshold.
    pub zone6_quarterly: Decimal,
}

/// Special social security contribution (BBSZ) configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialContributionConfig {
    /// Monthly wage thresholds.
    pub monthly_thresholds: MonthlyThresholds,
    /// Quarterly income thresholds.
    pub quarterly_thresholds: QuarterlyThresholds,
    /// Base quarterly amount of the top band for both joint regimes.
    pub joint_top_band_base: Decimal,
    /// Single-person regime.
    pub individual: IndividualRates,
    /// Joint regime, partner with income.
    pub joint_with_income: JointWithIncomeRates,
    /// Joint regime, partner without income.
    pub joint_without_income: JointWithoutIncomeRates,
}

/// Coefficients of the structural reduction formula for one category.
///
/// `R = F + α(S0 − S) + γ(S2 − S) + δ(W − S1)`; the high-wage component
/// (`delta`, `s1`) is carried but unused for category 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionCoefficients {
    /// Flat quarterly amount (F).
    pub flat_amount: Decimal,
    /// Slope for low wages (α).
    pub alpha: Decimal,
    /// Slope for very low wages (γ).
    pub gamma: Decimal,
    /// Slope for the high-wage component (δ).
    #[serde(default)]
    pub delta: Decimal,
    /// Low-wage threshold, quarterly (S0).
    pub s0: Decimal,
    /// High-wage threshold, quarterly (S1).
    #[serde(default)]
    pub s1: Option<Decimal>,
    /// Very-low-wage threshold, quarterly (S2).
    pub s2: Decimal,
}

/// Part-time multiplier (β) constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartTimeMultiplier {
    /// Work fractions below this get the base multiplier.
    pub lower_fraction: Decimal,
    /// Work fractions at or above this get `1 / fraction`.
    pub upper_fraction: Decimal,
    /// Multiplier for small fractions.
    pub base: Decimal,
    /// Increase per unit of fraction above `lower_fraction`.
    pub slope: Decimal,
}

/// Structural reduction configuration from structural_reduction.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralReductionConfig {
    /// Coefficients by reduction category.
    pub categories: BTreeMap<u8, ReductionCoefficients>,
    /// Part-time multiplier constants.
    pub part_time: PartTimeMultiplier,
}

/// Statutory limits on meal vouchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealVoucherLimits {
    /// Maximum employer share per voucher.
    pub max_employer_per_day: Decimal,
    /// Minimum employee share per voucher.
    pub min_employee_per_day: Decimal,
    /// Maximum face value per voucher.
    pub max_total_per_day: Decimal,
    /// Nominal full-time working days in a year.
    pub working_days_per_year: Decimal,
}

/// The complete parameter table for one tax year.
///
/// Loaded once and never mutated. Moving to a new fiscal year means loading
/// a new table, not patching this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTable {
    metadata: ParameterMetadata,
    income_tax: IncomeTaxConfig,
    social_security: SocialSecurityConfig,
    wage_bonus: WageBonusConfig,
    special_contribution: SpecialContributionConfig,
    structural_reduction: StructuralReductionConfig,
    meal_vouchers: MealVoucherLimits,
}

impl ParameterTable {
    /// Creates a validated table from its component parts.
    ///
    /// Returns `InvalidParameter` if any part is inconsistent.
    pub fn new(
        metadata: ParameterMetadata,
        income_tax: IncomeTaxConfig,
        social_security: SocialSecurityConfig,
        wage_bonus: WageBonusConfig,
        special_contribution: SpecialContributionConfig,
        structural_reduction: StructuralReductionConfig,
        meal_vouchers: MealVoucherLimits,
    ) -> EngineResult<Self> {
        let table = Self {
            metadata,
            income_tax,
            social_security,
            wage_bonus,
            special_contribution,
            structural_reduction,
            meal_vouchers,
        };
        table.validate()?;
        Ok(table)
    }

    /// Returns the table metadata.
    pub fn metadata(&self) -> &ParameterMetadata {
        &self.metadata
    }

    /// Returns the tax year of this table.
    pub fn tax_year(&self) -> u16 {
        self.metadata.tax_year
    }

    /// Returns the income tax schedule.
    pub fn income_tax(&self) -> &IncomeTaxConfig {
        &self.income_tax
    }

    /// Returns the social security rates.
    pub fn social_security(&self) -> &SocialSecurityConfig {
        &self.social_security
    }

    /// Returns the wage bonus parameters.
    pub fn wage_bonus(&self) -> &WageBonusConfig {
        &self.wage_bonus
    }

    /// Returns the special contribution parameters.
    pub fn special_contribution(&self) -> &SpecialContributionConfig {
        &self.special_contribution
    }

    /// Returns the structural reduction parameters.
    pub fn structural_reduction(&self) -> &StructuralReductionConfig {
        &self.structural_reduction
    }

    /// Returns the meal voucher limits.
    pub fn meal_vouchers(&self) -> &MealVoucherLimits {
        &self.meal_vouchers
    }

    fn validate(&self) -> EngineResult<()> {
        self.validate_brackets()?;

        let ss = &self.social_security;
        check_fraction("social_security.employee_rate", ss.employee_rate)?;
        check_fraction("social_security.employer_rate", ss.employer_rate)?;
        check_fraction(
            "social_security.expense_deduction_rate",
            ss.expense_deduction_rate,
        )?;
        check_non_negative(
            "social_security.expense_deduction_cap",
            ss.expense_deduction_cap,
        )?;

        let wb = &self.wage_bonus;
        check_wage_bonus_part("wage_bonus.part_a", &wb.part_a)?;
        check_wage_bonus_part("wage_bonus.part_b", &wb.part_b)?;
        check_fraction("wage_bonus.fiscal_rate_a", wb.fiscal_rate_a)?;
        check_fraction("wage_bonus.fiscal_rate_b", wb.fiscal_rate_b)?;

        let sc = &self.special_contribution;
        let g = &sc.monthly_thresholds;
        check_ascending(
            "special_contribution.monthly_thresholds",
            &[g.g1, g.g2, g.g3, g.g4, g.g5],
        )?;
        let k = &sc.quarterly_thresholds;
        check_ascending(
            "special_contribution.quarterly_thresholds",
            &[k.k1, k.k2, k.k3, k.k4, k.k5, k.k6],
        )?;

        let sr = &self.structural_reduction;
        if sr.categories.is_empty() {
            return Err(EngineError::invalid_parameter(
                "structural_reduction.categories",
                "at least one category must be configured",
            ));
        }
        if sr.part_time.lower_fraction >= sr.part_time.upper_fraction {
            return Err(EngineError::invalid_parameter(
                "structural_reduction.part_time",
                "lower_fraction must be below upper_fraction",
            ));
        }

        let mv = &self.meal_vouchers;
        if mv.max_employer_per_day + mv.min_employee_per_day > mv.max_total_per_day {
            return Err(EngineError::invalid_parameter(
                "meal_vouchers",
                "employer maximum plus employee minimum exceeds the face value limit",
            ));
        }
        if mv.working_days_per_year <= Decimal::ZERO {
            return Err(EngineError::invalid_parameter(
                "meal_vouchers.working_days_per_year",
                "must be positive",
            ));
        }

        Ok(())
    }

    fn validate_brackets(&self) -> EngineResult<()> {
        let field = "income_tax.brackets";
        let brackets = &self.income_tax.brackets;

        let Some((last, bounded)) = brackets.split_last() else {
            return Err(EngineError::invalid_parameter(field, "must not be empty"));
        };
        if last.upper_bound.is_some() {
            return Err(EngineError::invalid_parameter(
                field,
                "the last bracket must be unbounded",
            ));
        }

        let mut previous = Decimal::ZERO;
        for bracket in bounded {
            let Some(upper) = bracket.upper_bound else {
                return Err(EngineError::invalid_parameter(
                    field,
                    "only the last bracket may be unbounded",
                ));
            };
            if upper <= previous {
                return Err(EngineError::invalid_parameter(
                    field,
                    format!("upper bounds must strictly increase (got {} after {})", upper, previous),
                ));
            }
            previous = upper;
        }

        for bracket in brackets {
            check_fraction(field, bracket.rate)?;
        }
        Ok(())
    }
}

fn check_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::invalid_parameter(
            field,
            format!("{} is not a fraction between 0 and 1", value),
        ));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_parameter(
            field,
            format!("{} must not be negative", value),
        ));
    }
    Ok(())
}

fn check_ascending(field: &str, values: &[Decimal]) -> EngineResult<()> {
    if values.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(EngineError::invalid_parameter(
            field,
            "thresholds must strictly increase",
        ));
    }
    Ok(())
}

fn check_wage_bonus_part(field: &str, part: &WageBonusPart) -> EngineResult<()> {
    check_non_negative(field, part.amount)?;
    check_non_negative(field, part.phase_out_coefficient)?;
    if part.phase_out_ceiling < part.wage_ceiling {
        return Err(EngineError::invalid_parameter(
            field,
            "phase_out_ceiling must not be below wage_ceiling",
        ));
    }
    Ok(())
}
