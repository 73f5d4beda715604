//! Line-item overview of a payroll calculation.
//!
//! The overview lays out the net pay and employer cost records as one table
//! with four sections, per month or per year. It only reformats amounts the
//! calculators already produced.

mod format;

pub use format::format_eur_be;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round2;
use crate::models::{CompensationProfile, EmployerCostResult, NetPayResult};

/// Labels whose amounts are totals and are shown without a `+` sign.
const TOTAL_LABELS: [&str; 4] = [
    "Brutoloon",
    "NETTO UITBETAALD",
    "NETTO KOOPKRACHT",
    "TOTALE LOONKOST",
];

/// Period the overview amounts are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Yearly amounts divided by twelve.
    #[default]
    Monthly,
    /// Yearly amounts as is.
    Yearly,
}

impl Period {
    fn title(self) -> &'static str {
        match self {
            Period::Monthly => "Overzicht per Maand",
            Period::Yearly => "Overzicht per Jaar",
        }
    }

    fn scale(self, yearly: Decimal) -> Decimal {
        match self {
            Period::Monthly => round2(yearly / Decimal::from(12)),
            Period::Yearly => round2(yearly),
        }
    }
}

/// One row of an overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row label.
    pub label: String,
    /// Amount in the overview period; `None` for section headers.
    pub amount: Option<Decimal>,
    /// Whether the row starts a section.
    pub is_section_header: bool,
}

impl LineItem {
    fn header(label: &str) -> Self {
        Self {
            label: label.to_string(),
            amount: None,
            is_section_header: true,
        }
    }

    fn line(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount: Some(amount),
            is_section_header: false,
        }
    }

    /// Formats the amount for display.
    ///
    /// Totals are unsigned, other amounts signed, and section headers blank.
    pub fn display_amount(&self) -> String {
        match self.amount {
            Some(amount) => format_eur_be(amount, !TOTAL_LABELS.contains(&self.label.as_str())),
            None => String::new(),
        }
    }
}

/// A titled list of line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// "Overzicht per Maand" or "Overzicht per Jaar".
    pub title: String,
    /// Period of every amount.
    pub period: Period,
    /// Rows in display order.
    pub items: Vec<LineItem>,
}

impl Overview {
    /// Returns the amount of the first row with `label`.
    pub fn amount_of(&self, label: &str) -> Option<Decimal> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .and_then(|item| item.amount)
    }
}

/// Lays out a calculation as an overview.
///
/// Sections, in order: INKOMSTEN, INHOUDINGEN, the NETTO UITBETAALD total,
/// KOOPKRACHT and WERKGEVERSKOST. The wage bonus amounts in `net` are monthly
/// and are scaled to yearly before the period conversion.
pub fn compose_overview(
    profile: &CompensationProfile,
    net: &NetPayResult,
    cost: &EmployerCostResult,
    period: Period,
) -> Overview {
    let twelve = Decimal::from(12);
    let v = |yearly: Decimal| period.scale(yearly);

    let meal_vouchers_employer = v(profile.meal_voucher_employer_yearly());
    let eco_vouchers = v(profile.eco_voucher_yearly());
    let expense_allowance = v(profile.yearly_expense_allowance());

    let items = vec![
        LineItem::header("INKOMSTEN"),
        LineItem::line("Brutoloon", v(net.gross_yearly)),
        LineItem::line("Sociale werkbonus (A+B)", v(net.social_wage_bonus * twelve)),
        LineItem::line("Fiscale werkbonus", v(net.fiscal_wage_bonus * twelve)),
        LineItem::header("INHOUDINGEN"),
        LineItem::line("RSZ werknemer", v(net.employee_social_contribution)),
        LineItem::line("Kostenforfait (info)", v(net.expense_deduction)),
        LineItem::line("Personenbelasting", v(net.income_tax)),
        LineItem::line("BBSZ", v(net.special_contribution)),
        LineItem::line(
            "Maaltijdcheques (WN, aftrek)",
            v(profile.meal_voucher_employee_yearly()),
        ),
        LineItem::line("NETTO UITBETAALD", v(net.net_yearly)),
        LineItem::header("KOOPKRACHT"),
        LineItem::line("Maaltijdcheques (WG)", meal_vouchers_employer),
        LineItem::line("Ecocheques", eco_vouchers),
        LineItem::line("Kosten eigen aan WG", expense_allowance),
        LineItem::line("NETTO KOOPKRACHT", v(net.purchasing_power_yearly)),
        LineItem::header("WERKGEVERSKOST"),
        LineItem::line("RSZ werkgever", v(cost.employer_social_contribution)),
        LineItem::line("GV werkgever", v(cost.group_insurance)),
        LineItem::line("AO verzekering", v(cost.work_injury_insurance)),
        LineItem::line("Maaltijdcheques (WG)", meal_vouchers_employer),
        LineItem::line("Ecocheques", eco_vouchers),
        LineItem::line("Kosten eigen aan WG", expense_allowance),
        LineItem::line("TOTALE LOONKOST", v(cost.total_cost_yearly)),
    ];

    Overview {
        title: period.title().to_string(),
        period,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{EmployerCostOptions, compute_employer_cost, compute_net_pay};
    use crate::config::test_table;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn overview(profile: &CompensationProfile, period: Period) -> Overview {
        let table = test_table();
        let net = compute_net_pay(&table, profile).unwrap();
        let cost = compute_employer_cost(&table, profile, &net, EmployerCostOptions::default()).unwrap();
        compose_overview(profile, &net, &cost, period)
    }

    #[test]
    fn test_sections_in_order() {
        let profile = CompensationProfile::builder(dec("2000")).build().unwrap();
        let result = overview(&profile, Period::Monthly);

        let headers: Vec<&str> = result
            .items
            .iter()
            .filter(|item| item.is_section_header)
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(
            headers,
            vec!["INKOMSTEN", "INHOUDINGEN", "KOOPKRACHT", "WERKGEVERSKOST"]
        );
        assert_eq!(result.items.len(), 24);
        assert_eq!(result.items.last().unwrap().label, "TOTALE LOONKOST");
    }

    #[test]
    fn test_monthly_overview_amounts() {
        let profile = CompensationProfile::builder(dec("2000")).build().unwrap();
        let result = overview(&profile, Period::Monthly);

        assert_eq!(result.title, "Overzicht per Maand");
        assert_eq!(result.amount_of("Brutoloon"), Some(dec("2000.00")));
        assert_eq!(result.amount_of("Sociale werkbonus (A+B)"), Some(dec("272.21")));
        assert_eq!(result.amount_of("Fiscale werkbonus"), Some(dec("120.53")));
        // 2864.59 / 12
        assert_eq!(result.amount_of("RSZ werknemer"), Some(dec("238.72")));
        assert_eq!(result.amount_of("BBSZ"), Some(dec("0.77")));
        assert_eq!(result.amount_of("NETTO UITBETAALD"), Some(dec("1673.92")));
        assert_eq!(result.amount_of("TOTALE LOONKOST"), Some(dec("2087.75")));
    }

    #[test]
    fn test_yearly_overview_amounts() {
        let profile = CompensationProfile::builder(dec("3000"))
            .meal_vouchers(dec("1300.20"), Decimal::ZERO)
            .build()
            .unwrap();
        let result = overview(&profile, Period::Yearly);

        assert_eq!(result.title, "Overzicht per Jaar");
        assert_eq!(result.period, Period::Yearly);
        assert_eq!(result.amount_of("Brutoloon"), Some(dec("36000.00")));
        assert_eq!(result.amount_of("Sociale werkbonus (A+B)"), Some(dec("423.36")));
        assert_eq!(result.amount_of("Maaltijdcheques (WG)"), Some(dec("1300.20")));
        assert_eq!(result.amount_of("NETTO KOOPKRACHT"), Some(dec("27244.84")));
        assert_eq!(result.amount_of("TOTALE LOONKOST"), Some(dec("44833.20")));
    }

    #[test]
    fn test_display_amounts() {
        let profile = CompensationProfile::builder(dec("2000")).build().unwrap();
        let result = overview(&profile, Period::Monthly);
        let display = |label: &str| {
            result
                .items
                .iter()
                .find(|item| item.label == label)
                .map(LineItem::display_amount)
                .unwrap()
        };

        assert_eq!(display("INKOMSTEN"), "");
        assert_eq!(display("Brutoloon"), "€ 2.000,00");
        assert_eq!(display("RSZ werknemer"), "€ +238,72");
        assert_eq!(display("Maaltijdcheques (WN, aftrek)"), "€ 0,00");
        assert_eq!(display("TOTALE LOONKOST"), "€ 2.087,75");
    }

    #[test]
    fn test_period_default_and_serde() {
        assert_eq!(Period::default(), Period::Monthly);
        let period: Period = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(period, Period::Yearly);
    }
}
