//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! parameter tables from YAML files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{EngineError, EngineResult};

use super::registry::ParameterRegistry;
use super::types::{
    IncomeTaxConfig, MealVoucherLimits, ParameterMetadata, ParameterTable,
    SocialSecurityConfig, SpecialContributionConfig, StructuralReductionConfig, WageBonusConfig,
};

/// Loads and provides access to one tax year's parameter table.
///
/// # Directory Structure
///
/// Each tax year lives in its own directory:
/// ```text
/// config/2025/
/// ├── parameters.yaml            # Metadata (tax year, source)
/// ├── income_tax.yaml            # Progressive tax brackets
/// ├── social_security.yaml       # RSZ rates and expense deduction
/// ├── wage_bonus.yaml            # Werkbonus parts A and B
/// ├── special_contribution.yaml  # BBSZ thresholds per regime
/// ├── structural_reduction.yaml  # Employer reduction per category
/// └── meal_vouchers.yaml         # Meal voucher limits
/// ```
///
/// # Example
///
/// ```no_run
/// use bediende_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/2025").unwrap();
/// println!("Loaded tax year {}", loader.table().tax_year());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: Arc<ParameterTable>,
}

impl ConfigLoader {
    /// Loads a parameter table from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The assembled table fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bediende_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/2025")?;
    /// # Ok::<(), bediende_payroll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ParameterMetadata>(&path.join("parameters.yaml"))?;
        let income_tax = Self::load_yaml::<IncomeTaxConfig>(&path.join("income_tax.yaml"))?;
        let social_security =
            Self::load_yaml::<SocialSecurityConfig>(&path.join("social_security.yaml"))?;
        let wage_bonus = Self::load_yaml::<WageBonusConfig>(&path.join("wage_bonus.yaml"))?;
        let special_contribution =
            Self::load_yaml::<SpecialContributionConfig>(&path.join("special_contribution.yaml"))?;
        let structural_reduction =
            Self::load_yaml::<StructuralReductionConfig>(&path.join("structural_reduction.yaml"))?;
        let meal_vouchers =
            Self::load_yaml::<MealVoucherLimits>(&path.join("meal_vouchers.yaml"))?;

        let table = ParameterTable::new(
            metadata,
            income_tax,
            social_security,
            wage_bonus,
            special_contribution,
            structural_reduction,
            meal_vouchers,
        )?;

        Ok(Self {
            table: Arc::new(table),
        })
    }

    /// Loads every tax-year directory below `root` into a registry.
    ///
    /// Subdirectories without a `parameters.yaml` are skipped. Fails if no
    /// table could be loaded, or if two directories declare the same year.
    pub fn load_registry<P: AsRef<Path>>(root: P) -> EngineResult<ParameterRegistry> {
        let root = root.as_ref();
        let root_str = root.display().to_string();

        let entries = fs::read_dir(root).map_err(|_| EngineError::ConfigNotFound {
            path: root_str.clone(),
        })?;

        let mut registry = ParameterRegistry::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: root_str.clone(),
            })?;

            let path = entry.path();
            if path.is_dir() && path.join("parameters.yaml").exists() {
                let loader = Self::load(&path)?;
                registry.insert(loader.shared_table())?;
            }
        }

        if registry.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no parameter directories found)", root_str),
            });
        }

        Ok(registry)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded parameter table.
    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    /// Returns a shared handle to the loaded parameter table.
    pub fn shared_table(&self) -> Arc<ParameterTable> {
        Arc::clone(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/2025"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.table().tax_year(), 2025);
        assert_eq!(loader.table().metadata().employee_type, "bediende");
    }

    #[test]
    fn test_income_tax_brackets_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let brackets = &loader.table().income_tax().brackets;

        assert_eq!(brackets.len(), 5);
        assert_eq!(brackets[0].upper_bound, Some(dec("10570")));
        assert_eq!(brackets[0].rate, dec("0"));
        assert_eq!(brackets[3].upper_bound, Some(dec("46440")));
        assert_eq!(brackets[4].upper_bound, None);
        assert_eq!(brackets[4].rate, dec("0.50"));
    }

    #[test]
    fn test_social_security_rates_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let ss = loader.table().social_security();

        assert_eq!(ss.employee_rate, dec("0.1307"));
        assert_eq!(ss.employer_rate, dec("0.25"));
        assert_eq!(ss.expense_deduction_rate, dec("0.30"));
        assert_eq!(ss.expense_deduction_cap, dec("5930.00"));
    }

    #[test]
    fn test_wage_bonus_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let wb = loader.table().wage_bonus();

        assert_eq!(wb.part_a.wage_ceiling, dec("2669.96"));
        assert_eq!(wb.part_a.amount, dec("115.91"));
        assert_eq!(wb.part_b.phase_out_ceiling, dec("2669.96"));
        assert_eq!(wb.part_b.phase_out_coefficient, dec("0.2699"));
        assert_eq!(wb.fiscal_rate_b, dec("0.5254"));
    }

    #[test]
    fn test_structural_reduction_category_one_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let sr = loader.table().structural_reduction();

        let category = sr.categories.get(&1).unwrap();
        assert_eq!(category.alpha, dec("0.1400"));
        assert_eq!(category.s0, dec("11233.89"));
        assert_eq!(category.s1, None);
        assert_eq!(sr.part_time.base, dec("1.18"));
    }

    #[test]
    fn test_meal_voucher_limits_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let mv = loader.table().meal_vouchers();

        assert_eq!(mv.max_employer_per_day, dec("6.91"));
        assert_eq!(mv.min_employee_per_day, dec("1.09"));
        assert_eq!(mv.max_total_per_day, dec("8.00"));
        assert_eq!(mv.working_days_per_year, dec("260"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("parameters.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_registry_finds_2025() {
        let registry = ConfigLoader::load_registry("./config").unwrap();

        assert!(registry.get(2025).is_ok());
        assert_eq!(registry.latest().unwrap().tax_year(), 2025);
    }

    #[test]
    fn test_load_registry_missing_root_returns_error() {
        let result = ConfigLoader::load_registry("/nonexistent/root");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_shared_table_points_to_same_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let a = loader.shared_table();
        let b = loader.shared_table();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
