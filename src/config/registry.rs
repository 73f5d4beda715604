//! Parameter tables keyed by tax year.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{EngineError, EngineResult};

use super::types::ParameterTable;

/// Read-only set of parameter tables, one per tax year.
///
/// Tables are shared through `Arc` so that request handlers and parallel
/// sweeps can use them without locking.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    tables: BTreeMap<u16, Arc<ParameterTable>>,
}

impl ParameterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table under its own tax year.
    ///
    /// Returns `InvalidParameter` if a table for that year is already present.
    pub fn insert(&mut self, table: Arc<ParameterTable>) -> EngineResult<()> {
        let year = table.tax_year();
        if self.tables.contains_key(&year) {
            return Err(EngineError::invalid_parameter(
                "tax_year",
                format!("duplicate parameter table for {}", year),
            ));
        }
        self.tables.insert(year, table);
        Ok(())
    }

    /// Returns the table for a tax year.
    pub fn get(&self, year: u16) -> EngineResult<Arc<ParameterTable>> {
        self.tables
            .get(&year)
            .cloned()
            .ok_or(EngineError::ParameterYearNotFound { year })
    }

    /// Returns the table for the most recent tax year, if any.
    pub fn latest(&self) -> Option<Arc<ParameterTable>> {
        self.tables.values().next_back().cloned()
    }

    /// Resolves an optional tax year, defaulting to the most recent table.
    pub fn resolve(&self, year: Option<u16>) -> EngineResult<Arc<ParameterTable>> {
        match year {
            Some(year) => self.get(year),
            None => self
                .latest()
                .ok_or(EngineError::ParameterYearNotFound { year: 0 }),
        }
    }

    /// Returns the registered tax years in ascending order.
    pub fn years(&self) -> Vec<u16> {
        self.tables.keys().copied().collect()
    }

    /// Returns true if no table is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
