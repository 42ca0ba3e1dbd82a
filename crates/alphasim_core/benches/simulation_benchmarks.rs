//! Criterion benchmarks for alphasim_core
//!
//! Run with: cargo bench -p alphasim_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use alphasim_core::analysis::{SweepConfig, sweep_evaluate};
use alphasim_core::config::SimulationConfig;
use alphasim_core::simulation::simulate;

fn bench_simulation_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_iterations");
    for n_iter in [100, 1_000, 5_000] {
        let config = SimulationConfig {
            n_iter,
            ..SimulationConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(n_iter), &config, |b, config| {
            b.iter(|| simulate(black_box(config)).unwrap());
        });
    }
    group.finish();
}

fn bench_simulation_group_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_group_counts");
    for n_groups in [2, 4, 8] {
        let config = SimulationConfig {
            n_groups,
            n_iter: 1_000,
            ..SimulationConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(n_groups),
            &config,
            |b, config| {
                b.iter(|| simulate(black_box(config)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_small_sweep(c: &mut Criterion) {
    let config = SweepConfig {
        group_counts: vec![2, 3, 4],
        obs_counts: vec![10, 25],
        n_iter: 200,
        threshold: 0.05,
        seed: 42,
    };
    c.bench_function("sweep_3x2_200iter", |b| {
        b.iter(|| sweep_evaluate(black_box(&config), None).unwrap());
    });
}

criterion_group!(
    benches,
    bench_simulation_iterations,
    bench_simulation_group_counts,
    bench_small_sweep
);
criterion_main!(benches);
