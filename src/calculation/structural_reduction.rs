//! Structural reduction of employer social security contributions.
//!
//! The reduction is computed per quarter from the quarterly reference wage and
//! converted to a monthly amount. It is not capped here: the employer cost
//! calculator limits it to the contribution actually charged.

use rust_decimal::Decimal;

use crate::config::{PartTimeMultiplier, StructuralReductionConfig};
use crate::error::{EngineError, EngineResult};

use super::rounding::round2;

/// Category 1, the general category for private-sector employers.
pub const DEFAULT_REDUCTION_CATEGORY: u8 = 1;

/// One additive term of the reduction base, rounded and floored at zero.
fn component(value: Decimal) -> Decimal {
    round2(value).max(Decimal::ZERO)
}

fn check_work_fraction(work_fraction: Decimal) -> EngineResult<()> {
    if work_fraction <= Decimal::ZERO || work_fraction > Decimal::ONE {
        return Err(EngineError::invalid_input(
            "work_fraction",
            format!("{} is outside (0, 1]", work_fraction),
        ));
    }
    Ok(())
}

/// Calculates the quarterly reduction base `R` for a category.
///
/// `R = F + α(S0 − S) + γ(S2 − S) [+ δ(S − S1)]` with `S = monthly wage × 3 ×
/// work fraction`. Each term is floored at zero on its own, so a negative term
/// never offsets a positive one. The high-wage term only applies when the
/// category configures `s1`.
///
/// # Errors
///
/// Returns `CategoryNotFound` if the category has no coefficients and
/// `InvalidInput` for a work fraction outside (0, 1].
pub fn reduction_base(
    config: &StructuralReductionConfig,
    category: u8,
    monthly_wage: Decimal,
    work_fraction: Decimal,
) -> EngineResult<Decimal> {
    check_work_fraction(work_fraction)?;
    let p = config
        .categories
        .get(&category)
        .ok_or(EngineError::CategoryNotFound { category })?;

    let s = monthly_wage * Decimal::from(3) * work_fraction;

    let mut r = p.flat_amount;
    r += component(p.alpha * (p.s0 - s));
    r += component(p.gamma * (p.s2 - s));
    if let Some(s1) = p.s1 {
        r += component(p.delta * (s - s1));
    }

    Ok(round2(r))
}

/// Returns the part-time multiplier β for a work fraction.
///
/// Below `lower_fraction` the base multiplier applies, between the two
/// fractions it grows linearly, and from `upper_fraction` on it is
/// `1 / work_fraction` so that full-time-equivalent work gets the full base.
pub fn part_time_multiplier(config: &PartTimeMultiplier, work_fraction: Decimal) -> Decimal {
    if work_fraction < config.lower_fraction {
        config.base
    } else if work_fraction < config.upper_fraction {
        config.base + (work_fraction - config.lower_fraction) * config.slope
    } else {
        Decimal::ONE / work_fraction
    }
}

/// Calculates the monthly structural reduction.
///
/// `monthly = R × work_fraction × β / 3`, rounded to cents.
///
/// # Examples
///
/// ```no_run
/// use bediende_payroll::calculation::structural_reduction_monthly;
/// use bediende_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let monthly = structural_reduction_monthly(
///     loader.table().structural_reduction(),
///     1,
///     Decimal::new(2000, 0),
///     Decimal::ONE,
/// )
/// .unwrap();
/// assert_eq!(monthly, Decimal::new(41225, 2));
/// ```
pub fn structural_reduction_monthly(
    config: &StructuralReductionConfig,
    category: u8,
    monthly_wage: Decimal,
    work_fraction: Decimal,
) -> EngineResult<Decimal> {
    let r = reduction_base(config, category, monthly_wage, work_fraction)?;
    let beta = part_time_multiplier(&config.part_time, work_fraction);

    Ok(round2(r * work_fraction * beta / Decimal::from(3)))
}
