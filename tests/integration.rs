//! Integration tests for the payroll engine HTTP API.
//!
//! This test suite covers:
//! - Net pay and employer cost for reference salaries
//! - Meal voucher plans, insurance percentages and regimes
//! - Monthly and yearly overviews
//! - Gross salary sweeps
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use bediende_payroll::api::{AppState, create_router};
use bediende_payroll::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let registry = ConfigLoader::load_registry("./config").expect("Failed to load config");
    AppState::new(registry)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/calculate", body.to_string()).await
}

async fn post_sweep(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/sweep", body.to_string()).await
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .map(decimal)
        .unwrap_or_else(|| panic!("Expected a decimal string, got {}", value));
    assert_eq!(actual, decimal(expected), "amount mismatch");
}

fn overview_amount(result: &Value, label: &str) -> Value {
    result["overview"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["label"] == label)
        .map(|item| item["amount"].clone())
        .unwrap_or_else(|| panic!("No overview item labelled {}", label))
}

// =============================================================================
// Net pay and employer cost
// =============================================================================

#[tokio::test]
async fn test_calculate_gross_2000_full_time() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2000" }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["tax_year"], 2025);

    let net = &result["net_pay"];
    assert_amount(&net["bruto_jaar"], "24000.00");
    assert_amount(&net["sociale_werkbonus"], "272.21");
    assert_amount(&net["fiscale_werkbonus"], "120.53");
    assert_amount(&net["rsz_werknemer"], "2864.59");
    assert_amount(&net["personenbelasting"], "1039.13");
    assert_amount(&net["bbsz"], "9.24");
    assert_amount(&net["nettoloon_maand"], "1673.92");

    let cost = &result["employer_cost"];
    assert_amount(&cost["structurele_vermindering_jaar"], "4947.00");
    assert_amount(&cost["rsz_werkgever"], "1053.00");
    assert_amount(&cost["totaal_loonkost_jaar"], "25053.00");
    assert_amount(&cost["totaal_loonkost_maand"], "2087.75");
}

#[tokio::test]
async fn test_calculate_gross_3000_with_yearly_meal_vouchers() {
    let (status, result) = post_calculate(json!({
        "tax_year": 2025,
        "profile": {
            "gross_monthly_salary": "3000",
            "meal_voucher_employer_yearly": "1300.20"
        }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["net_pay"]["nettoloon_maand"], "2162.05");
    assert_amount(&result["net_pay"]["koopkracht_maand"], "2270.40");
    assert_amount(&result["employer_cost"]["totaal_loonkost_maand"], "3736.10");
}

#[tokio::test]
async fn test_calculate_half_cent_fiscal_bonus() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2206.75" }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let net = &result["net_pay"];
    assert_amount(&net["fiscale_werkbonus"], "104.08");
    assert_amount(&net["personenbelasting"], "1905.76");
    assert_amount(&net["nettoloon_jaar"], "21230.40");
}

#[tokio::test]
async fn test_calculate_with_meal_voucher_plan() {
    let (status, result) = post_calculate(json!({
        "profile": {
            "gross_monthly_salary": "3000",
            "meal_vouchers": {
                "employer_per_day": "5.91",
                "employee_per_day": "1.09",
                "vacation_days": 20,
                "sick_days": 5,
                "public_holidays": 10
            }
        }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    // 225 worked days
    assert_amount(&result["employer_cost"]["maaltijdcheques_wg"], "1329.75");
    // 25944.64 - 245.25
    assert_amount(&result["net_pay"]["nettoloon_jaar"], "25699.39");
}

#[tokio::test]
async fn test_calculate_with_insurance_percentages() {
    let (status, result) = post_calculate(json!({
        "profile": {
            "gross_monthly_salary": "4000",
            "group_insurance_employer_pct": "4",
            "work_injury_insurance_pct": "1"
        }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["employer_cost"]["gv_werkgever"], "1920.00");
    assert_amount(&result["employer_cost"]["ao_verzekering"], "480.00");
    // 48000 + 12000 + 1920 + 480
    assert_amount(&result["employer_cost"]["totaal_loonkost_jaar"], "62400.00");
}

#[tokio::test]
async fn test_calculate_joint_regime() {
    let (status, result) = post_calculate(json!({
        "profile": {
            "gross_monthly_salary": "3000",
            "special_contribution_regime": "joint_with_income"
        }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["net_pay"]["bbsz"], "208.92");
}

#[tokio::test]
async fn test_calculate_custom_employer_rate() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2000" },
        "employer_social_rate_pct": "10"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    // reduction capped at 2400
    assert_amount(&result["employer_cost"]["structurele_vermindering_jaar"], "2400.00");
    assert_amount(&result["employer_cost"]["rsz_werkgever"], "0.00");
}

#[tokio::test]
async fn test_calculate_result_metadata() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2500" }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].as_str().is_some());
    assert!(result["timestamp"].as_str().is_some());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
    assert!(result["duration_us"].as_u64().is_some());
}

// =============================================================================
// Overview
// =============================================================================

#[tokio::test]
async fn test_monthly_overview_by_default() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2000" }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["overview"]["title"], "Overzicht per Maand");
    assert_eq!(result["overview"]["period"], "monthly");
    assert_amount(&overview_amount(&result, "Brutoloon"), "2000.00");
    assert_amount(&overview_amount(&result, "TOTALE LOONKOST"), "2087.75");
    assert!(overview_amount(&result, "INKOMSTEN").is_null());
}

#[tokio::test]
async fn test_yearly_overview() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2000" },
        "period": "yearly"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["overview"]["title"], "Overzicht per Jaar");
    assert_amount(&overview_amount(&result, "Brutoloon"), "24000.00");
    assert_amount(&overview_amount(&result, "NETTO UITBETAALD"), "20087.04");
}

// =============================================================================
// Sweep
// =============================================================================

#[tokio::test]
async fn test_sweep_points() {
    let (status, result) = post_sweep(json!({
        "profile": { "gross_monthly_salary": "3000" },
        "range": "500",
        "steps": 5
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["tax_year"], 2025);
    let points = result["points"].as_array().unwrap();
    assert_eq!(points.len(), 5);
    assert_amount(&points[0]["gross_monthly"], "2500.00");
    assert_amount(&points[2]["net_monthly"], "2162.05");
    assert_amount(&points[4]["gross_monthly"], "3500.00");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sweep_on_multi_thread_runtime() {
    let (status, result) = post_sweep(json!({
        "profile": { "gross_monthly_salary": "2500" },
        "range": "1000",
        "steps": 15
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let points = result["points"].as_array().unwrap();
    assert_eq!(points.len(), 15);
    assert_amount(&points[0]["gross_monthly"], "1500.00");
    assert_amount(&points[14]["gross_monthly"], "3500.00");
}

#[tokio::test]
async fn test_sweep_invalid_steps() {
    let (status, result) = post_sweep(json!({
        "profile": { "gross_monthly_salary": "3000" },
        "range": "500",
        "steps": 40
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_INPUT");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_unknown_tax_year() {
    let (status, result) = post_calculate(json!({
        "tax_year": 1999,
        "profile": { "gross_monthly_salary": "2000" }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "TAX_YEAR_NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_category() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2000" },
        "category": 9
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "CATEGORY_NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_work_fraction() {
    let (status, result) = post_calculate(json!({
        "profile": { "gross_monthly_salary": "2000", "work_fraction": "1.5" }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_PROFILE");
}

#[tokio::test]
async fn test_meal_voucher_above_limit() {
    let (status, result) = post_calculate(json!({
        "profile": {
            "gross_monthly_salary": "2000",
            "meal_vouchers": { "employer_per_day": "7.50", "employee_per_day": "1.09" }
        }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_PROFILE");
}

#[tokio::test]
async fn test_meal_voucher_absence_days_out_of_range() {
    for absences in [
        json!({ "vacation_days": 4294967295u32, "sick_days": 1 }),
        json!({ "sick_days": 61 }),
    ] {
        let mut plan = json!({ "employer_per_day": "5.91", "employee_per_day": "1.09" });
        for (key, value) in absences.as_object().unwrap() {
            plan[key] = value.clone();
        }

        let (status, result) = post_calculate(json!({
            "profile": { "gross_monthly_salary": "2000", "meal_vouchers": plan }
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(result["code"], "INVALID_PROFILE");
    }
}

#[tokio::test]
async fn test_missing_profile_is_validation_error() {
    let (status, result) = post_calculate(json!({ "tax_year": 2025 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/calculate",
        "{ not json".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}
