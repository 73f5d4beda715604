//! Belgian euro formatting.

use rust_decimal::Decimal;

use crate::calculation::round2;

/// Formats an amount the Belgian way: `€ 1.234,56`.
///
/// The amount is rounded to cents first. Thousands are separated by a dot and
/// decimals by a comma. With `signed`, positive amounts get a `+` prefix;
/// negative amounts always carry their `-`.
///
/// # Examples
///
/// ```
/// use bediende_payroll::overview::format_eur_be;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_eur_be(Decimal::new(123456, 2), true), "€ +1.234,56");
/// assert_eq!(format_eur_be(Decimal::new(-5, 1), false), "€ -0,50");
/// ```
pub fn format_eur_be(amount: Decimal, signed: bool) -> String {
    let rounded = round2(amount);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else if signed && rounded > Decimal::ZERO {
        "+"
    } else {
        ""
    };

    format!("€ {}{},{}", sign, group_thousands(whole), cents)
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
