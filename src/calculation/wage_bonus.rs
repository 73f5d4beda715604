//! Wage bonus (werkbonus) calculation.
//!
//! The wage bonus lowers the employee social security contribution for low
//! wages (social part) and, as a fixed share of that, the income tax (fiscal
//! part). Parts A and B phase out independently.
//!
//! Unlike the other formulas, parts are evaluated in `f64` and the exact value
//! of the double is rounded half to even, without the cent nudge: 125.00 ×
//! 0.5254 gives 65.67.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::{WageBonusConfig, WageBonusPart};

use super::rounding::round2;

/// The two parts of a wage bonus, monthly amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBonusParts {
    /// Part A.
    pub part_a: Decimal,
    /// Part B.
    pub part_b: Decimal,
}

impl WageBonusParts {
    /// Returns part A plus part B.
    pub fn total(&self) -> Decimal {
        self.part_a + self.part_b
    }
}

/// Nearest double to a decimal amount.
fn binary(value: Decimal) -> Option<f64> {
    value.to_string().parse().ok()
}

/// Rounds the double produced by `compute` to cents, ties to even.
///
/// Falls back to [`round2`] on `exact` if an operand has no finite double.
fn binary_cents(exact: Decimal, compute: impl FnOnce() -> Option<f64>) -> Decimal {
    let rounded = compute()
        .filter(|value| value.is_finite())
        .and_then(Decimal::from_f64_retain)
        .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .unwrap_or_else(|| round2(exact));
    if rounded.is_zero() {
        Decimal::new(0, 2)
    } else {
        rounded
    }
}

/// Three-zone phase-out of one bonus part, rounded to cents.
fn phase_out(part: &WageBonusPart, wage: Decimal) -> Decimal {
    if wage <= part.wage_ceiling {
        binary_cents(part.amount, || binary(part.amount))
    } else if wage <= part.phase_out_ceiling {
        let exact = part.amount - part.phase_out_coefficient * (wage - part.wage_ceiling);
        binary_cents(exact.max(Decimal::ZERO), || {
            let reduced = binary(part.amount)?
                - binary(part.phase_out_coefficient)? * (binary(wage)? - binary(part.wage_ceiling)?);
            Some(reduced.max(0.0))
        })
    } else {
        Decimal::new(0, 2)
    }
}

/// One fiscal part: the social part times its share, rounded to cents.
fn fiscal_part(social: Decimal, rate: Decimal) -> Decimal {
    binary_cents(social * rate, || Some(binary(social)? * binary(rate)?))
}

/// Calculates the social wage bonus for a reference monthly wage.
///
/// Each part pays its full amount up to its wage ceiling, then decreases
/// linearly (never below zero) up to its phase-out ceiling, and is zero above.
/// Parts are rounded to cents, ties to even.
///
/// # Examples
///
/// ```no_run
/// use bediende_payroll::calculation::social_wage_bonus;
/// use bediende_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let parts = social_wage_bonus(loader.table().wage_bonus(), Decimal::new(2000, 0));
/// assert_eq!(parts.part_a, Decimal::new(11591, 2));
/// assert_eq!(parts.part_b, Decimal::new(15630, 2));
/// ```
pub fn social_wage_bonus(config: &WageBonusConfig, reference_monthly_wage: Decimal) -> WageBonusParts {
    WageBonusParts {
        part_a: phase_out(&config.part_a, reference_monthly_wage),
        part_b: phase_out(&config.part_b, reference_monthly_wage),
    }
}

/// Calculates the fiscal wage bonus from the social parts.
///
/// A product on an exact half cent is decided by its double, so
/// 125.00 × 0.5254 gives 65.67 and not 65.68.
pub fn fiscal_wage_bonus(config: &WageBonusConfig, social: &WageBonusParts) -> WageBonusParts {
    WageBonusParts {
        part_a: fiscal_part(social.part_a, config.fiscal_rate_a),
        part_b: fiscal_part(social.part_b, config.fiscal_rate_b),
    }
}
