//! Envelope returned by the HTTP layer for one calculation.
//!
//! Wraps the engine records with the metadata a caller needs to trace a
//! calculation back to the engine and parameter table that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::SweepPoint;
use crate::overview::Overview;

use super::{EmployerCostResult, NetPayResult};

/// The complete result of a payroll calculation.
///
/// # Example
///
/// ```
/// use bediende_payroll::models::{CalculationResult, EmployerCostResult, NetPayResult};
/// use bediende_payroll::overview::{Overview, Period};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let zero = Decimal::ZERO;
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     tax_year: 2025,
///     net_pay: NetPayResult {
///         gross_monthly: zero, gross_yearly: zero, employee_social_contribution: zero,
///         social_wage_bonus: zero, fiscal_wage_bonus: zero, expense_deduction: zero,
///         taxable_income: zero, income_tax: zero, special_contribution: zero,
///         net_monthly: zero, net_yearly: zero, purchasing_power_monthly: zero,
///         purchasing_power_yearly: zero,
///     },
///     employer_cost: EmployerCostResult {
///         employer_social_contribution: zero, group_insurance: zero,
///         work_injury_insurance: zero, meal_vouchers_employer: zero, eco_vouchers: zero,
///         expense_allowance: zero, structural_reduction_yearly: zero,
///         total_cost_yearly: zero, total_cost_monthly: zero,
///     },
///     overview: Overview { title: "Overzicht per Maand".to_string(), period: Period::Monthly, items: vec![] },
///     duration_us: 0,
/// };
/// assert_eq!(result.tax_year, 2025);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The tax year of the parameter table used.
    pub tax_year: u16,
    /// Net pay and purchasing power.
    pub net_pay: NetPayResult,
    /// Total employer cost.
    pub employer_cost: EmployerCostResult,
    /// Line-item breakdown for display.
    pub overview: Overview,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

/// The result of a gross salary sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Unique identifier for this sweep.
    pub calculation_id: Uuid,
    /// The tax year of the parameter table used.
    pub tax_year: u16,
    /// One point per gross salary, in ascending order.
    pub points: Vec<SweepPoint>,
}
