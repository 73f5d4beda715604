//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_employer_cost, compute_net_pay, sweep_gross_salary};
use crate::error::EngineError;
use crate::models::{CalculationResult, SweepResult};
use crate::overview::compose_overview;

use super::request::{CalculationRequest, SweepRequestBody, employer_options};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/sweep", post(sweep_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a profile and returns net pay, employer cost and the overview.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match perform_calculation(&state, &request, correlation_id) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                tax_year = result.tax_year,
                gross_monthly = %result.net_pay.gross_monthly,
                net_monthly = %result.net_pay.net_monthly,
                total_cost_monthly = %result.employer_cost.total_cost_monthly,
                duration_us = result.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err, "Calculation failed"),
    }
}

/// Handler for POST /sweep endpoint.
///
/// Accepts a profile plus a range and returns one point per gross salary.
async fn sweep_handler(
    State(state): State<AppState>,
    payload: Result<Json<SweepRequestBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sweep request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    // Blocks on the rayon pool.
    let outcome =
        tokio::task::spawn_blocking(move || perform_sweep(&state, &request, correlation_id)).await;

    match outcome {
        Ok(Ok(result)) => {
            info!(
                correlation_id = %correlation_id,
                tax_year = result.tax_year,
                points = result.points.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Sweep completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Ok(Err(err)) => engine_error_response(correlation_id, err, "Sweep failed"),
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Sweep task did not complete"
            );
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", "Sweep did not complete"),
            )
        }
    }
}

/// Runs both calculators and composes the overview.
fn perform_calculation(
    state: &AppState,
    request: &CalculationRequest,
    calculation_id: Uuid,
) -> Result<CalculationResult, EngineError> {
    let start_time = Instant::now();

    let table = state.table(request.tax_year)?;
    let profile = request.profile.to_profile(&table)?;
    let options = employer_options(&table, request.category, request.employer_social_rate_pct)?;

    let net_pay = compute_net_pay(&table, &profile)?;
    let employer_cost = compute_employer_cost(&table, &profile, &net_pay, options)?;
    let overview = compose_overview(&profile, &net_pay, &employer_cost, request.period);

    Ok(CalculationResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year: table.tax_year(),
        net_pay,
        employer_cost,
        overview,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}

fn perform_sweep(
    state: &AppState,
    request: &SweepRequestBody,
    calculation_id: Uuid,
) -> Result<SweepResult, EngineError> {
    let table = state.table(request.tax_year)?;
    let profile = request.profile.to_profile(&table)?;
    let options = employer_options(&table, request.category, request.employer_social_rate_pct)?;

    let points = sweep_gross_salary(&table, &profile, request.sweep(), options)?;

    Ok(SweepResult {
        calculation_id,
        tax_year: table.tax_year(),
        points,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}", context
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
