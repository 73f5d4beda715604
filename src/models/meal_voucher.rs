//! Meal voucher plan.
//!
//! Meal vouchers are granted per worked day. This module turns per-day
//! employer and employee shares plus absence days into the yearly totals a
//! [`CompensationProfile`](super::CompensationProfile) expects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MealVoucherLimits;
use crate::error::{EngineError, EngineResult};

/// Most paid vacation days a plan accepts.
pub const MAX_VACATION_DAYS: u32 = 50;
/// Most sick days a plan accepts.
pub const MAX_SICK_DAYS: u32 = 60;
/// Most public holidays a plan accepts.
pub const MAX_PUBLIC_HOLIDAYS: u32 = 15;
/// Most unpaid leave days a plan accepts.
pub const MAX_UNPAID_LEAVE_DAYS: u32 = 60;

/// Per-day meal voucher shares and the absences that reduce worked days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealVoucherPlan {
    /// Employer share per voucher.
    pub employer_per_day: Decimal,
    /// Employee share per voucher.
    pub employee_per_day: Decimal,
    /// Paid vacation days.
    #[serde(default)]
    pub vacation_days: u32,
    /// Sick days.
    #[serde(default)]
    pub sick_days: u32,
    /// Public holidays.
    #[serde(default)]
    pub public_holidays: u32,
    /// Unpaid leave days.
    #[serde(default)]
    pub unpaid_leave_days: u32,
}

/// Yearly meal voucher totals derived from a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealVoucherAmounts {
    /// Number of vouchers (worked days) in the year.
    pub worked_days: Decimal,
    /// Employer share per year.
    pub employer_yearly: Decimal,
    /// Employee share per year.
    pub employee_yearly: Decimal,
}

impl MealVoucherPlan {
    /// Checks the absence days and the per-day shares against their limits.
    ///
    /// A plan with both shares at zero means "no meal vouchers" and skips the
    /// share limits.
    pub fn validate(&self, limits: &MealVoucherLimits) -> EngineResult<()> {
        for (field, days, max) in [
            ("meal_vouchers.vacation_days", self.vacation_days, MAX_VACATION_DAYS),
            ("meal_vouchers.sick_days", self.sick_days, MAX_SICK_DAYS),
            ("meal_vouchers.public_holidays", self.public_holidays, MAX_PUBLIC_HOLIDAYS),
            ("meal_vouchers.unpaid_leave_days", self.unpaid_leave_days, MAX_UNPAID_LEAVE_DAYS),
        ] {
            if days > max {
                return Err(EngineError::invalid_profile(
                    field,
                    format!("{} exceeds the maximum of {}", days, max),
                ));
            }
        }

        if self.employer_per_day < Decimal::ZERO {
            return Err(EngineError::invalid_profile(
                "meal_vouchers.employer_per_day",
                "must not be negative",
            ));
        }
        if self.employee_per_day < Decimal::ZERO {
            return Err(EngineError::invalid_profile(
                "meal_vouchers.employee_per_day",
                "must not be negative",
            ));
        }
        if self.employer_per_day.is_zero() && self.employee_per_day.is_zero() {
            return Ok(());
        }

        if self.employer_per_day > limits.max_employer_per_day {
            return Err(EngineError::invalid_profile(
                "meal_vouchers.employer_per_day",
                format!("exceeds the maximum of {}", limits.max_employer_per_day),
            ));
        }
        if self.employee_per_day < limits.min_employee_per_day {
            return Err(EngineError::invalid_profile(
                "meal_vouchers.employee_per_day",
                format!("is below the minimum of {}", limits.min_employee_per_day),
            ));
        }
        if self.employer_per_day + self.employee_per_day > limits.max_total_per_day {
            return Err(EngineError::invalid_profile(
                "meal_vouchers",
                format!(
                    "face value {} exceeds the maximum of {}",
                    self.employer_per_day + self.employee_per_day,
                    limits.max_total_per_day
                ),
            ));
        }
        Ok(())
    }

    /// Worked days in the year for the given part-time ratio, rounded to one decimal.
    ///
    /// Never negative: absences beyond the nominal working year yield zero.
    pub fn worked_days(&self, limits: &MealVoucherLimits, work_fraction: Decimal) -> Decimal {
        let absences: Decimal = [
            self.vacation_days,
            self.sick_days,
            self.public_holidays,
            self.unpaid_leave_days,
        ]
        .into_iter()
        .map(Decimal::from)
        .sum();
        let days = ((limits.working_days_per_year - absences) * work_fraction).round_dp(1);
        days.max(Decimal::ZERO)
    }

    /// Validates the plan and returns the yearly totals.
    pub fn yearly_amounts(
        &self,
        limits: &MealVoucherLimits,
        work_fraction: Decimal,
    ) -> EngineResult<MealVoucherAmounts> {
        self.validate(limits)?;
        let worked_days = self.worked_days(limits, work_fraction);

        Ok(MealVoucherAmounts {
            worked_days,
            employer_yearly: self.employer_per_day * worked_days,
            employee_yearly: self.employee_per_day * worked_days,
        })
    }
}
