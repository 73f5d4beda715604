//! Payroll engine for Belgian salaried employees (bediendes)
//!
//! This crate computes net pay, purchasing power and total employer cost from
//! a gross monthly salary and benefits, using versioned statutory parameter
//! tables loaded from YAML.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod overview;
