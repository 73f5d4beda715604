//! Cent rounding shared by every formula.

use rust_decimal::{Decimal, RoundingStrategy};

/// The nudge added before rounding, 1e-9.
///
/// Reference payroll tables are produced with this nudge so that amounts sitting
/// exactly on a half cent always go to the higher cent.
pub fn rounding_epsilon() -> Decimal {
    Decimal::new(1, 9)
}

/// Rounds an amount to two decimals, half away from zero, after adding
/// [`rounding_epsilon`].
///
/// # Examples
///
/// ```
/// use bediende_payroll::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("412.246666").unwrap()), Decimal::from_str("412.25").unwrap());
/// assert_eq!(round2(Decimal::from_str("2.125").unwrap()), Decimal::from_str("2.13").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let rounded = (value + rounding_epsilon())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // No "-0.00" in results.
    if rounded.is_zero() {
        Decimal::new(0, 2)
    } else {
        rounded
    }
}
