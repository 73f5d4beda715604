//! Percentage and fraction types.
//!
//! User-facing inputs express rates as percentages (0–100) while every
//! formula works with fractions (0–1). Keeping them as distinct types means
//! the only way across is [`Percent::to_fraction`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A rate expressed as a fraction between 0 and 1.
///
/// # Example
///
/// ```
/// use bediende_payroll::models::Fraction;
/// use rust_decimal::Decimal;
///
/// let rate = Fraction::new(Decimal::new(25, 2)).unwrap();
/// assert_eq!(rate.value(), Decimal::new(25, 2));
/// assert!(Fraction::new(Decimal::new(5, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fraction(Decimal);

impl Fraction {
    /// The zero rate.
    pub const ZERO: Fraction = Fraction(Decimal::ZERO);

    /// Creates a fraction, rejecting values outside [0, 1].
    pub fn new(value: Decimal) -> EngineResult<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(EngineError::invalid_input(
                "fraction",
                format!("{} is not between 0 and 1", value),
            ));
        }
        Ok(Self(value))
    }

    /// Wraps a value already known to lie in [0, 1].
    pub(crate) const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Applies the fraction to an amount.
    pub fn of(self, amount: Decimal) -> Decimal {
        amount * self.0
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Fraction::new(value).map_err(serde::de::Error::custom)
    }
}

/// A rate expressed as a percentage between 0 and 100.
///
/// # Example
///
/// ```
/// use bediende_payroll::models::Percent;
/// use rust_decimal::Decimal;
///
/// let pct = Percent::new(Decimal::new(5, 0)).unwrap();
/// assert_eq!(pct.to_fraction().value(), Decimal::new(5, 2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a percentage, rejecting values outside [0, 100].
    pub fn new(value: Decimal) -> EngineResult<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(EngineError::invalid_input(
                "percent",
                format!("{} is not between 0 and 100", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Converts to the fraction used by the formulas.
    pub fn to_fraction(self) -> Fraction {
        Fraction(self.0 / Decimal::ONE_HUNDRED)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Percent::new(value).map_err(serde::de::Error::custom)
    }
}
