//! Calculation logic for the payroll engine.
//!
//! This module contains the statutory formulas (income tax, wage bonus,
//! special social security contribution, structural reduction), the two
//! calculators that compose them into net pay and employer cost, and the
//! gross salary sweep built on top of both.

mod employer_cost;
mod income_tax;
mod net_pay;
mod rounding;
mod special_contribution;
mod structural_reduction;
mod sweep;
mod wage_bonus;

pub use employer_cost::{EmployerCostOptions, compute_employer_cost};
pub use income_tax::{marginal_rate, personal_income_tax};
pub use net_pay::compute_net_pay;
pub use rounding::{round2, rounding_epsilon};
pub use special_contribution::{SpecialContribution, special_contribution};
pub use structural_reduction::{
    DEFAULT_REDUCTION_CATEGORY, part_time_multiplier, reduction_base,
    structural_reduction_monthly,
};
pub use sweep::{
    MAX_SWEEP_STEPS, MIN_SWEEP_STEPS, SweepPoint, SweepRequest, gross_salary_points,
    sweep_gross_salary,
};
pub use wage_bonus::{WageBonusParts, fiscal_wage_bonus, social_wage_bonus};
