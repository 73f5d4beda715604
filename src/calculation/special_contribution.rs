//! Special social security contribution (BBSZ) calculation.
//!
//! The contribution is fixed per quarter. The quarterly income `K = 3 × monthly
//! wage` selects a band, and each band computes the quarterly amount from the
//! monthly wage. Bands differ per household regime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SpecialContributionConfig;
use crate::models::SpecialContributionRegime;

use super::rounding::round2;

/// The special contribution per quarter, month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialContribution {
    /// Quarterly amount.
    pub quarterly: Decimal,
    /// Monthly amount (a third of the quarterly amount).
    pub monthly: Decimal,
    /// Yearly amount (twelve rounded monthly amounts).
    pub yearly: Decimal,
}

/// The part of `x` that lies above `low`, capped at `high`; never negative.
fn within(x: Decimal, low: Decimal, high: Decimal) -> Decimal {
    (x.min(high) - low).max(Decimal::ZERO)
}

/// Calculates the special contribution for a monthly wage.
///
/// A quarterly income below the lowest band of the regime yields zero for all
/// three fields.
///
/// # Examples
///
/// ```no_run
/// use bediende_payroll::calculation::special_contribution;
/// use bediende_payroll::config::ConfigLoader;
/// use bediende_payroll::models::SpecialContributionRegime;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let bbsz = special_contribution(
///     loader.table().special_contribution(),
///     Decimal::new(3000, 0),
///     SpecialContributionRegime::Individual,
/// );
/// assert_eq!(bbsz.yearly, Decimal::new(15960, 2));
/// ```
pub fn special_contribution(
    config: &SpecialContributionConfig,
    monthly_wage: Decimal,
    regime: SpecialContributionRegime,
) -> SpecialContribution {
    let quarterly = quarterly_amount(config, monthly_wage, regime);
    let monthly = round2(quarterly / Decimal::from(3));
    let yearly = round2(monthly * Decimal::from(12));

    SpecialContribution {
        quarterly: round2(quarterly),
        monthly,
        yearly,
    }
}

fn quarterly_amount(
    config: &SpecialContributionConfig,
    monthly_wage: Decimal,
    regime: SpecialContributionRegime,
) -> Decimal {
    let s = monthly_wage;
    let k = s * Decimal::from(3);
    let g = &config.monthly_thresholds;
    let q = &config.quarterly_thresholds;

    match regime {
        SpecialContributionRegime::JointWithIncome => {
            let p = &config.joint_with_income;
            if q.k1 <= k && k < q.k2 {
                p.zone1_quarterly
            } else if q.k2 <= k && k <= q.k3 {
                (within(s, g.g1, g.g2) * p.zone2_rate).max(p.minimum_quarterly)
            } else if k > q.k3 {
                joint_top_band(config, s, p.zone3_rate, p.maximum_quarterly)
            } else {
                Decimal::ZERO
            }
        }
        SpecialContributionRegime::JointWithoutIncome => {
            let p = &config.joint_without_income;
            if q.k2 <= k && k <= q.k3 {
                within(s, g.g1, g.g2) * p.zone2_rate
            } else if k > q.k3 {
                joint_top_band(config, s, p.zone3_rate, p.maximum_quarterly)
            } else {
                Decimal::ZERO
            }
        }
        SpecialContributionRegime::Individual => {
            let p = &config.individual;
            if q.k2 <= k && k <= q.k3 {
                within(s, g.g1, g.g2) * p.zone2_rate
            } else if q.k3 < k && k <= q.k4 {
                p.zone3_quarterly + within(s, g.g2, g.g3) * p.zone3_rate
            } else if q.k4 < k && k <= q.k5 {
                p.zone4_quarterly + within(s, g.g3, g.g4) * p.zone4_rate
            } else if q.k5 < k && k <= q.k6 {
                p.zone5_quarterly + within(s, g.g4, g.g5) * p.zone5_rate
            } else if k > q.k6 {
                p.zone6_quarterly
            } else {
                Decimal::ZERO
            }
        }
    }
}

fn joint_top_band(
    config: &SpecialContributionConfig,
    monthly_wage: Decimal,
    rate: Decimal,
    maximum: Decimal,
) -> Decimal {
    let excess = (monthly_wage - config.monthly_thresholds.g2).max(Decimal::ZERO);
    (config.joint_top_band_base + excess * rate).min(maximum)
}
