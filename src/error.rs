//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its surrounding layers can report.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations return this error type. Arithmetic edge cases
/// (income below every bracket, wage below every contribution band) are not
/// errors; they produce zero-valued results.
///
/// # Example
///
/// ```
/// use bediende_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A parameter table failed validation after loading.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// No parameter table is registered for the requested tax year.
    #[error("No parameter table loaded for tax year {year}")]
    ParameterYearNotFound {
        /// The requested tax year.
        year: u16,
    },

    /// The structural reduction category has no coefficients configured.
    #[error("Structural reduction category not found: {category}")]
    CategoryNotFound {
        /// The category that was not found.
        category: u8,
    },

    /// A compensation profile field was invalid.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A direct formula call received an argument outside its domain.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The argument that was invalid.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_profile(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_parameter(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
