//! Criterion benchmarks for the attenuation simulator.
//!
//! Measures batch simulation across realisation counts and energy-grid sizes,
//! plus the statistics reduction on its own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slm_core::material::Material;
use slm_core::sample::LayeredSample;
use slm_core::types::EnergySeries;
use slm_engine::mc::Simulator;
use slm_engine::rng::SimRng;

/// Sample with `bins` energy bins on both materials.
fn sample_with_bins(bins: usize) -> LayeredSample {
    let energy: Vec<f64> = (1..=bins).map(|i| i as f64 * 1.0e5).collect();
    let sigma_1: Vec<f64> = (1..=bins).map(|i| 0.1 / i as f64).collect();
    let sigma_2: Vec<f64> = (1..=bins).map(|i| 0.05 / i as f64).collect();

    LayeredSample::new(
        1.0,
        0.01,
        Material::new("A", EnergySeries::with_energy(energy.clone(), sigma_1).unwrap()),
        Material::new("B", EnergySeries::with_energy(energy, sigma_2).unwrap()),
        0.5,
    )
    .unwrap()
}

/// Benchmark simulation for increasing realisation counts.
fn bench_simulate_realisations(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_realisations");
    let sample = sample_with_bins(1);
    let simulator = Simulator::new(&sample);

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = SimRng::from_seed(42);
            b.iter(|| {
                simulator
                    .simulate_attenuation_with_rng(black_box(size), &mut rng)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark simulation for increasing energy-grid sizes.
fn bench_simulate_energy_bins(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_energy_bins");

    for bins in [1, 16, 128] {
        let sample = sample_with_bins(bins);
        let simulator = Simulator::new(&sample);
        group.bench_with_input(BenchmarkId::from_parameter(bins), &bins, |b, _| {
            let mut rng = SimRng::from_seed(42);
            b.iter(|| {
                simulator
                    .simulate_attenuation_with_rng(black_box(10_000), &mut rng)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark the statistics reduction.
fn bench_statistics(c: &mut Criterion) {
    let sample = sample_with_bins(16);
    let simulator = Simulator::new(&sample);
    let mut rng = SimRng::from_seed(7);
    let batch = simulator
        .simulate_attenuation_with_rng(100_000, &mut rng)
        .unwrap();

    c.bench_function("get_statistics_100k_x16", |b| {
        b.iter(|| simulator.get_statistics(black_box(&batch)))
    });
}

criterion_group!(
    benches,
    bench_simulate_realisations,
    bench_simulate_energy_bins,
    bench_statistics
);
criterion_main!(benches);
