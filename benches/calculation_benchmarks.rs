//! Performance benchmarks for the payroll engine.
//!
//! Covers the calculators called directly, a full `/calculate` round trip
//! through the router, a batch of profiles and the parallel sweep.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use bediende_payroll::api::{AppState, create_router};
use bediende_payroll::calculation::{
    EmployerCostOptions, SweepRequest, compute_employer_cost, compute_net_pay, sweep_gross_salary,
};
use bediende_payroll::config::{ConfigLoader, ParameterTable};
use bediende_payroll::models::CompensationProfile;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_table() -> ParameterTable {
    ConfigLoader::load("./config/2025")
        .expect("Failed to load config")
        .table()
        .clone()
}

fn create_test_state() -> AppState {
    AppState::new(ConfigLoader::load_registry("./config").expect("Failed to load config"))
}

fn profile(gross: i64) -> CompensationProfile {
    CompensationProfile::builder(Decimal::from(gross))
        .meal_vouchers(Decimal::new(130020, 2), Decimal::ZERO)
        .build()
        .expect("Failed to build profile")
}

/// Benchmark: net pay and employer cost for one profile.
fn bench_single_calculation(c: &mut Criterion) {
    let table = load_table();
    let profile = profile(3000);

    c.bench_function("single_calculation", |b| {
        b.iter(|| {
            let net = compute_net_pay(&table, black_box(&profile)).unwrap();
            let cost =
                compute_employer_cost(&table, &profile, &net, EmployerCostOptions::default()).unwrap();
            black_box(cost)
        })
    });
}

/// Benchmark: `/calculate` through the router.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "profile": {
            "gross_monthly_salary": "3000",
            "meal_vouchers": { "employer_per_day": "5.91", "employee_per_day": "1.09" }
        }
    })
    .to_string();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: a batch of 1000 profiles across the salary range.
fn bench_batch_1000(c: &mut Criterion) {
    let table = load_table();
    let profiles: Vec<CompensationProfile> = (0..1000).map(|i| profile(1500 + i * 5)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));
    group.sample_size(20);

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let results: Vec<_> = profiles
                .iter()
                .map(|profile| {
                    let net = compute_net_pay(&table, profile).unwrap();
                    compute_employer_cost(&table, profile, &net, EmployerCostOptions::default())
                        .unwrap()
                })
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: sweeps of increasing resolution.
fn bench_sweep(c: &mut Criterion) {
    let table = load_table();
    let profile = profile(3000);

    let mut group = c.benchmark_group("sweep");

    for steps in [3usize, 7, 15].iter() {
        let request = SweepRequest {
            range: Decimal::from(1000),
            steps: *steps,
        };

        group.throughput(Throughput::Elements(*steps as u64));
        group.bench_with_input(BenchmarkId::new("steps", steps), steps, |b, _| {
            b.iter(|| {
                let points =
                    sweep_gross_salary(&table, &profile, request, EmployerCostOptions::default())
                        .unwrap();
                black_box(points)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_calculate_endpoint,
    bench_batch_1000,
    bench_sweep,
);
criterion_main!(benches);
