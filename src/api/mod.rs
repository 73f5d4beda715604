//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for calculating net pay and
//! employer cost, and for sweeping the gross salary of a profile.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ProfileRequest, SweepRequestBody};
pub use response::ApiError;
pub use state::AppState;
