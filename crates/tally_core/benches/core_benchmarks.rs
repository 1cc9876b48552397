//! Criterion benchmarks for tally_core statistics and pipeline.
//!
//! Measures the quadratic mode scan against the linear statistics, and the
//! cost of generating and smoothing sequences across sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tally_core::{
    average, generate_random_values, maximum, minimum, mode, smooth_values, SeededRng, ValueRange,
};

/// Generate benchmark data with a fixed seed.
fn generate_data(n: usize) -> Vec<f64> {
    let range = ValueRange::new(10.0, 110.0).expect("valid range");
    smooth_values(&generate_random_values(n, range, &mut SeededRng::from_seed(42)))
        .into_iter()
        .map(|v| v as f64)
        .collect()
}

/// Benchmark linear statistics against the nested-scan mode.
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [100, 1000, 5000] {
        let data = generate_data(size);

        group.bench_with_input(BenchmarkId::new("average", size), &data, |b, data| {
            b.iter(|| average(black_box(data)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("min_max", size), &data, |b, data| {
            b.iter(|| {
                (
                    minimum(black_box(data)).unwrap(),
                    maximum(black_box(data)).unwrap(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("mode", size), &data, |b, data| {
            b.iter(|| mode(black_box(data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark generation and smoothing.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let range = ValueRange::new(10.0, 110.0).expect("valid range");

    for size in [1000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("generate", size), &size, |b, &size| {
            let mut rng = SeededRng::from_seed(7);
            b.iter(|| generate_random_values(black_box(size), range, &mut rng));
        });

        let values = generate_random_values(size, range, &mut SeededRng::from_seed(7));
        group.bench_with_input(BenchmarkId::new("smooth", size), &values, |b, values| {
            b.iter(|| smooth_values(black_box(values)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statistics, bench_pipeline);
criterion_main!(benches);
