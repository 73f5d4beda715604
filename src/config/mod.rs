//! Parameter tables for the payroll engine.
//!
//! This module loads the versioned, read-only parameter tables (tax brackets,
//! social security rates, wage bonus, special contribution and structural
//! reduction coefficients) from YAML files, one directory per tax year.
//!
//! # Example
//!
//! ```no_run
//! use bediende_payroll::config::ConfigLoader;
//!
//! let registry = ConfigLoader::load_registry("./config").unwrap();
//! println!("Loaded tax years: {:?}", registry.years());
//! ```

mod loader;
mod registry;
mod types;

pub use loader::ConfigLoader;
pub use registry::ParameterRegistry;
pub use types::{
    IncomeTaxConfig, IndividualRates, JointWithIncomeRates, JointWithoutIncomeRates,
    MealVoucherLimits, MonthlyThresholds, ParameterMetadata, ParameterTable, PartTimeMultiplier,
    QuarterlyThresholds, ReductionCoefficients, SocialSecurityConfig, SpecialContributionConfig,
    StructuralReductionConfig, TaxBracket, WageBonusConfig, WageBonusPart,
};

/// Loads the bundled 2025 table for unit tests.
#[cfg(test)]
pub(crate) fn test_table() -> ParameterTable {
    ConfigLoader::load("./config/2025")
        .expect("Failed to load config")
        .table()
        .clone()
}
