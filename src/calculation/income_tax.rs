//! Personal income tax calculation.
//!
//! This module applies the progressive tax schedule of a parameter table to
//! a yearly taxable income.

use rust_decimal::Decimal;

use crate::config::IncomeTaxConfig;
use crate::error::{EngineError, EngineResult};

use super::rounding::round2;

/// Calculates personal income tax on a yearly taxable income.
///
/// Walks the brackets in order with a running lower bound starting at zero.
/// Each bracket taxes the slice `min(income, upper_bound) − lower_bound` at its
/// marginal rate; the walk stops at the first bracket whose upper bound is at
/// or above the income. The result is rounded to cents.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative income; negative incomes are a
/// caller error and are never clamped to zero.
///
/// # Examples
///
/// ```no_run
/// use bediende_payroll::calculation::personal_income_tax;
/// use bediende_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let tax = personal_income_tax(loader.table().income_tax(), Decimal::new(15200, 0)).unwrap();
/// assert_eq!(tax, Decimal::new(115750, 2));
/// ```
pub fn personal_income_tax(config: &IncomeTaxConfig, taxable_income: Decimal) -> EngineResult<Decimal> {
    if taxable_income < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "taxable_income",
            format!("{} must not be negative", taxable_income),
        ));
    }

    let mut tax = Decimal::ZERO;
    let mut lower_bound = Decimal::ZERO;

    for bracket in &config.brackets {
        let top = match bracket.upper_bound {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };

        let slice = top - lower_bound;
        if slice > Decimal::ZERO {
            tax += slice * bracket.rate;
        }

        match bracket.upper_bound {
            Some(upper) if taxable_income > upper => lower_bound = upper,
            _ => break,
        }
    }

    Ok(round2(tax))
}

/// Returns the marginal rate that applies to the next euro above `taxable_income`.
///
/// An income sitting exactly on a bracket bound gets the rate of the next bracket.
pub fn marginal_rate(config: &IncomeTaxConfig, taxable_income: Decimal) -> Decimal {
    config
        .brackets
        .iter()
        .find(|bracket| match bracket.upper_bound {
            Some(upper) => taxable_income < upper,
            None => true,
        })
        .map(|bracket| bracket.rate)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_table;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tax(income: &str) -> Decimal {
        personal_income_tax(test_table().income_tax(), dec(income)).unwrap()
    }

    #[test]
    fn test_zero_income_is_zero_tax() {
        assert_eq!(tax("0"), dec("0.00"));
    }

    #[test]
    fn test_income_in_exempt_bracket() {
        assert_eq!(tax("10570"), dec("0.00"));
        assert_eq!(tax("8000"), dec("0.00"));
    }

    #[test]
    fn test_income_at_bracket_bounds() {
        // (15200 - 10570) * 0.25
        assert_eq!(tax("15200"), dec("1157.50"));
        // 1157.50 + (26830 - 15200) * 0.40
        assert_eq!(tax("26830"), dec("5809.50"));
        // 5809.50 + (46440 - 26830) * 0.45
        assert_eq!(tax("46440"), dec("14634.00"));
    }

    #[test]
    fn test_income_in_top_bracket() {
        // 14634.00 + (60000 - 46440) * 0.50
        assert_eq!(tax("60000"), dec("21414.00"));
    }

    #[test]
    fn test_income_inside_bracket_is_rounded() {
        // 1157.50 + 5.41 * 0.40 = 1159.664
        assert_eq!(tax("15205.41"), dec("1159.66"));
        // 1157.50 + 10200.08 * 0.40 = 5237.532
        assert_eq!(tax("25400.08"), dec("5237.53"));
    }

    #[test]
    fn test_negative_income_rejected() {
        let result = personal_income_tax(test_table().income_tax(), dec("-1"));
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "taxable_income"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_marginal_rate_at_bounds() {
        let table = test_table();
        let config = table.income_tax();
        assert_eq!(marginal_rate(config, dec("0")), dec("0"));
        assert_eq!(marginal_rate(config, dec("10570")), dec("0.25"));
        assert_eq!(marginal_rate(config, dec("26829.99")), dec("0.40"));
        assert_eq!(marginal_rate(config, dec("1000000")), dec("0.50"));
    }

    #[test]
    fn test_marginal_slope_matches_rate_inside_each_bracket() {
        let table = test_table();
        let config = table.income_tax();
        for (lower, upper, rate) in [
            ("10570", "15200", "0.25"),
            ("15200", "26830", "0.40"),
            ("26830", "46440", "0.45"),
            ("46440", "56440", "0.50"),
        ] {
            let step = dec("1000");
            let a = personal_income_tax(config, dec(lower)).unwrap();
            let b = personal_income_tax(config, dec(lower) + step).unwrap();
            assert!(dec(lower) + step <= dec(upper));
            assert_eq!(b - a, step * dec(rate), "slope above {}", lower);
        }
    }

    proptest! {
        #[test]
        fn prop_tax_is_non_decreasing(a in 0u32..200_000, b in 0u32..200_000) {
            let table = test_table();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let tax_low = personal_income_tax(table.income_tax(), Decimal::from(low)).unwrap();
            let tax_high = personal_income_tax(table.income_tax(), Decimal::from(high)).unwrap();
            prop_assert!(tax_low <= tax_high);
        }

        #[test]
        fn prop_tax_never_exceeds_top_rate(income in 0u32..500_000) {
            let table = test_table();
            let income = Decimal::from(income);
            let tax = personal_income_tax(table.income_tax(), income).unwrap();
            prop_assert!(tax >= Decimal::ZERO);
            prop_assert!(tax <= income * dec("0.50"));
        }
    }
}
