//! Benchmarks for the bootstrap engine across the typical resample range

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use resample_bootstrap::Bootstrap;
use resample_statistics::{Mean, Median, Percentile};

fn sample_data(n: usize) -> Vec<f64> {
    // Deterministic pseudo-data; the engine's own RNG is seeded separately.
    (0..n).map(|i| 50.0 + ((i * 37) % 100) as f64 * 0.5).collect()
}

fn bench_resample_counts(c: &mut Criterion) {
    let sample = sample_data(100);
    let mut group = c.benchmark_group("bootstrap_mean");

    for &n_resamples in &[100usize, 1000, 5000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_resamples),
            &n_resamples,
            |b, &n| {
                let engine = Bootstrap::new().with_resamples(n).with_seed(42);
                b.iter(|| engine.run(&sample, &Mean).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let sample = sample_data(100);
    let engine = Bootstrap::new().with_resamples(1000).with_seed(42);
    let p90 = Percentile::new(90.0).unwrap();

    let mut group = c.benchmark_group("statistics_1000_resamples");
    group.bench_function("mean", |b| b.iter(|| engine.run(&sample, &Mean).unwrap()));
    group.bench_function("median", |b| b.iter(|| engine.run(&sample, &Median).unwrap()));
    group.bench_function("percentile_90", |b| {
        b.iter(|| engine.run(&sample, &p90).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_resample_counts, bench_statistics);
criterion_main!(benches);
