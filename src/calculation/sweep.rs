//! Gross salary sensitivity sweep.
//!
//! Recomputes net pay and employer cost for a range of gross salaries around
//! a profile, keeping every other input of the profile unchanged.

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ParameterTable;
use crate::error::{EngineError, EngineResult};
use crate::models::CompensationProfile;

use super::employer_cost::{EmployerCostOptions, compute_employer_cost};
use super::net_pay::compute_net_pay;
use super::rounding::round2;

/// Fewest points a sweep may have.
pub const MIN_SWEEP_STEPS: usize = 3;
/// Most points a sweep may have.
pub const MAX_SWEEP_STEPS: usize = 15;

/// Range and resolution of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRequest {
    /// Distance below and above the profile's gross monthly salary.
    pub range: Decimal,
    /// Number of evenly spaced points.
    pub steps: usize,
}

/// One gross salary of a sweep and its outcomes, monthly amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Gross monthly salary at this point.
    pub gross_monthly: Decimal,
    /// Net pay per month.
    pub net_monthly: Decimal,
    /// Purchasing power per month.
    pub purchasing_power_monthly: Decimal,
    /// Total employer cost per month.
    pub employer_cost_monthly: Decimal,
}

/// Returns the gross salaries a sweep visits.
///
/// `steps` evenly spaced values over `[gross − range, gross + range]`, each
/// rounded to cents. The last value is the upper end exactly. Values at or
/// below zero are dropped.
///
/// # Errors
///
/// Returns `InvalidInput` when `range` is not positive or `steps` is outside
/// [`MIN_SWEEP_STEPS`]..=[`MAX_SWEEP_STEPS`].
pub fn gross_salary_points(gross_monthly: Decimal, request: SweepRequest) -> EngineResult<Vec<Decimal>> {
    if request.range <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "range",
            format!("{} must be positive", request.range),
        ));
    }
    if !(MIN_SWEEP_STEPS..=MAX_SWEEP_STEPS).contains(&request.steps) {
        return Err(EngineError::invalid_input(
            "steps",
            format!(
                "{} is outside {}..={}",
                request.steps, MIN_SWEEP_STEPS, MAX_SWEEP_STEPS
            ),
        ));
    }

    let start = gross_monthly - request.range;
    let end = gross_monthly + request.range;
    let intervals = Decimal::from(request.steps - 1);

    let points = (0..request.steps)
        .map(|i| {
            if i == request.steps - 1 {
                end
            } else {
                start + (end - start) * Decimal::from(i) / intervals
            }
        })
        .map(round2)
        .filter(|gross| *gross > Decimal::ZERO)
        .collect();

    Ok(points)
}

/// Sweeps the gross salary of a profile.
///
/// Points are computed in parallel and returned in ascending gross order.
///
/// # Errors
///
/// Returns `InvalidInput` for an invalid request and propagates any
/// calculation error of an individual point.
///
/// # Examples
///
/// ```no_run
/// use bediende_payroll::calculation::{sweep_gross_salary, EmployerCostOptions, SweepRequest};
/// use bediende_payroll::config::ConfigLoader;
/// use bediende_payroll::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// let profile = CompensationProfile::builder(Decimal::new(3000, 0)).build().unwrap();
/// let request = SweepRequest { range: Decimal::new(500, 0), steps: 5 };
/// let points = sweep_gross_salary(loader.table(), &profile, request, EmployerCostOptions::default()).unwrap();
/// assert_eq!(points.len(), 5);
/// ```
pub fn sweep_gross_salary(
    table: &ParameterTable,
    profile: &CompensationProfile,
    request: SweepRequest,
    options: EmployerCostOptions,
) -> EngineResult<Vec<SweepPoint>> {
    let grosses = gross_salary_points(profile.gross_monthly_salary(), request)?;

    grosses
        .par_iter()
        .map(|&gross| -> EngineResult<SweepPoint> {
            let varied = profile.to_builder().gross_monthly_salary(gross).build()?;
            let net = compute_net_pay(table, &varied)?;
            let cost = compute_employer_cost(table, &varied, &net, options)?;

            Ok(SweepPoint {
                gross_monthly: net.gross_monthly,
                net_monthly: net.net_monthly,
                purchasing_power_monthly: net.purchasing_power_monthly,
                employer_cost_monthly: cost.total_cost_monthly,
            })
        })
        .collect()
}
