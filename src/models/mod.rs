//! Core data models for the payroll engine.
//!
//! This module contains the compensation profile, the unit-safe rate types,
//! and the result records produced by the calculators.

mod calculation_result;
mod meal_voucher;
mod payroll_result;
mod profile;
mod rate;

pub use calculation_result::{CalculationResult, SweepResult};
pub use meal_voucher::{MealVoucherAmounts, MealVoucherPlan};
pub use payroll_result::{EmployerCostResult, NetPayResult};
pub use profile::{CompensationProfile, CompensationProfileBuilder, SpecialContributionRegime};
pub use rate::{Fraction, Percent};
