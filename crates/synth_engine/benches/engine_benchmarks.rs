//! Benchmarks for ensemble stepping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use synth_engine::prelude::*;

fn reference_config() -> ScenarioConfig {
    ScenarioConfig {
        seed: Some(42),
        ..ScenarioConfig::default()
    }
}

fn bench_next_price(c: &mut Criterion) {
    let mut ensemble = build_ensemble(&reference_config()).unwrap();
    c.bench_function("ensemble_next_price", |b| {
        b.iter(|| black_box(ensemble.next_price().unwrap()))
    });
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_run");
    for steps in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut driver = Driver::new(build_ensemble(&reference_config()).unwrap());
                black_box(driver.run(steps).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next_price, bench_run);
criterion_main!(benches);
