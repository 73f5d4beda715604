//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ParameterRegistry, ParameterTable};
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the parameter tables of every loaded tax year. Tables are immutable,
/// so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<ParameterRegistry>,
}

impl AppState {
    /// Creates a new application state from a loaded registry.
    pub fn new(registry: ParameterRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns the parameter registry.
    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    /// Returns the table for `tax_year`, or the latest table when `None`.
    pub fn table(&self, tax_year: Option<u16>) -> EngineResult<Arc<ParameterTable>> {
        self.registry.resolve(tax_year)
    }
}
