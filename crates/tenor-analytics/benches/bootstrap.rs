//! Benchmarks for bootstrapping and valuation.
//!
//! Run with: cargo bench -p tenor-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tenor_analytics::prelude::*;
use tenor_curves::PiecewiseFlatCurve;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Semi-annual par-ish bonds maturing every year out to `years`.
fn create_instruments(years: usize) -> (Vec<FixedCoupon>, Vec<f64>) {
    let truth = create_truth_curve(years);
    let instruments: Vec<FixedCoupon> = (1..=years)
        .map(|y| FixedCoupon::new(0.03 + 0.001 * y as f64, y as f64, 2.0).with_notional(100.0))
        .collect();
    let prices = instruments.iter().map(|i| present(i, &truth)).collect();
    (instruments, prices)
}

fn create_truth_curve(years: usize) -> PiecewiseFlatCurve {
    let times: Vec<f64> = (1..=years).map(|y| y as f64).collect();
    let rates: Vec<f64> = (1..=years).map(|y| 0.02 + 0.0015 * (y as f64).sqrt()).collect();
    PiecewiseFlatCurve::from_knots(times, rates, f64::NAN).expect("valid knots")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");
    let bootstrapper = Bootstrapper::default();

    for years in [5, 10, 30] {
        let (instruments, prices) = create_instruments(years);
        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, _| {
            b.iter(|| bootstrapper.bootstrap(black_box(&instruments), black_box(&prices)));
        });
    }

    group.finish();
}

fn bench_valuation(c: &mut Criterion) {
    let curve = create_truth_curve(30);
    let bond = FixedCoupon::new(0.045, 29.5, 2.0).with_notional(100.0);
    let price = present(&bond, &curve);

    let mut group = c.benchmark_group("valuation");
    group.bench_function("present", |b| {
        b.iter(|| present(black_box(&bond), black_box(&curve)));
    });
    group.bench_function("yield", |b| {
        b.iter(|| yield_rate(black_box(&bond), black_box(price), 0.05));
    });
    group.bench_function("oas", |b| {
        b.iter(|| oas(black_box(&bond), black_box(&curve), black_box(price - 1.0), 0.0));
    });
    group.finish();
}

criterion_group!(benches, bench_bootstrap, bench_valuation);
criterion_main!(benches);
