//! Benchmarks for grid sizing and the explicit solver.
//!
//! Run with: cargo bench -p parabolic-engine

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use parabolic_core::{OptionType, ParameterSet};
use parabolic_engine::prelude::*;

fn reference() -> ParameterSet {
    ParameterSet::new(OptionType::Call, 100.0, 135.0, 0.05, 0.2, 1.0).unwrap()
}

// =============================================================================
// SIZING
// =============================================================================

fn bench_sizing(c: &mut Criterion) {
    let params = reference();
    let sizer = GridStepSizer::default();

    c.bench_function("size_grid", |b| {
        b.iter(|| sizer.size(black_box(&params), black_box(2000)))
    });
}

// =============================================================================
// SOLVING
// =============================================================================

fn bench_solve_by_resolution(c: &mut Criterion) {
    let params = reference();
    let solver = ExplicitSolver::new();

    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for n in [100_usize, 400, 1000] {
        let spec = size_grid(&params, n);
        let updates = (spec.temporal_steps() * spec.spatial_steps()) as u64;

        group.throughput(Throughput::Elements(updates));
        group.bench_with_input(BenchmarkId::from_parameter(n), &spec, |b, spec| {
            b.iter(|| solver.solve(black_box(&params), black_box(spec)))
        });
    }
    group.finish();
}

fn bench_full_pricing(c: &mut Criterion) {
    let call = reference();
    let put = call.with_option_type(OptionType::Put);

    let mut group = c.benchmark_group("price");
    group.sample_size(10);

    let fast = FiniteDifferencePricer::new(100).unwrap();
    group.bench_function("fast_call", |b| b.iter(|| fast.price(black_box(&call))));
    group.bench_function("fast_put", |b| b.iter(|| fast.price(black_box(&put))));

    let precise = FiniteDifferencePricer::new(2000).unwrap();
    group.bench_function("precise_call", |b| {
        b.iter(|| precise.price(black_box(&call)))
    });
    group.finish();
}

criterion_group!(benches, bench_sizing, bench_solve_by_resolution, bench_full_pricing);
criterion_main!(benches);
