//! Criterion benchmarks for sim_rng sampling throughput.
//!
//! Measures single draws and batch fills for uniform and normal sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sim_rng::RandomGenerator;

/// Benchmark single-value sampling.
fn bench_single_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_draw");
    let mut rng = RandomGenerator::new(42);

    group.bench_function("uniform", |b| b.iter(|| black_box(rng.sample_uniform())));
    group.bench_function("normal", |b| {
        b.iter(|| black_box(rng.sample_normal(black_box(0.0), black_box(1.0))))
    });
    group.bench_function("init", |b| b.iter(|| rng.init(black_box(42))));

    group.finish();
}

/// Benchmark batch fills across buffer sizes.
fn bench_batch_fills(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_fill");

    for size in [1_000, 10_000, 100_000] {
        let mut rng = RandomGenerator::new(42);
        let mut buffer = vec![0.0; size];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, _| {
            b.iter(|| rng.fill_uniform(black_box(&mut buffer)))
        });
        group.bench_with_input(BenchmarkId::new("normal", size), &size, |b, _| {
            b.iter(|| rng.fill_normal(black_box(&mut buffer), 0.0, 1.0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_draws, bench_batch_fills);
criterion_main!(benches);
