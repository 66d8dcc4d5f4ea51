//! Estimation benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forage::prelude::*;

/// Single walks on the default field.
fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    group.sample_size(100);

    let simulator = match WalkSimulator::new(AxisStep::default(), EllipseFood::default()) {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("cannot build simulator: {e}");
            return;
        }
    };
    let mut rng = SimRng::new(42);
    group.bench_function("default_field", |b| {
        b.iter(|| black_box(simulator.run(&mut rng)));
    });

    group.finish();
}

/// Interval estimation over growing samples.
fn bench_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval");

    for n in [100_usize, 1_000, 10_000] {
        let mut rng = SimRng::new(7);
        let sample: Vec<StepCount> = (0..n).map(|_| rng.gen_u64() % 50 + 2).collect();

        group.bench_with_input(BenchmarkId::new("normal", n), &sample, |b, sample| {
            b.iter(|| black_box(NormalInterval.estimate(sample, 0.999)));
        });
        group.bench_with_input(BenchmarkId::new("student_t", n), &sample, |b, sample| {
            b.iter(|| black_box(StudentTInterval.estimate(sample, 0.999)));
        });
    }

    group.finish();
}

/// Full sequential runs at increasing confidence.
fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    group.sample_size(10);

    for level in [0.9, 0.99, 0.999] {
        let config = ForageConfig::builder().confidence_level(level).build();
        group.bench_with_input(BenchmarkId::new("run", level), &config, |b, config| {
            b.iter(|| black_box(forage::estimation::run(config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_walk, bench_interval, bench_sequential);
criterion_main!(benches);
