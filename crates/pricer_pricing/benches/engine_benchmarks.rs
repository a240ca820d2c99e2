//! Criterion benchmarks for the lattice and Monte Carlo engines.
//!
//! Benchmarks cover:
//! - Forward pass and rollback at increasing step counts
//! - Full lattice pricing for each discretisation scheme
//! - Antithetic Monte Carlo sampling at increasing draw counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::{ExerciseStyle, OptionType};
use pricer_models::instruments::{ContractParams, PayoffEvaluator, PayoffKind};
use pricer_models::models::LatticeModel;
use pricer_pricing::lattice::Lattice;
use pricer_pricing::mc::MonteCarloEngine;
use pricer_pricing::pricing::price_lattice_unchecked;

fn atm_contract() -> ContractParams {
    ContractParams::new(100.0, 1.0, 100.0, 0.05, 0.2).unwrap()
}

/// Benchmark the two lattice passes in isolation.
fn bench_lattice_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_passes");
    let payoff = PayoffEvaluator::from_log(PayoffKind::Put, 100.0);

    for n_steps in [100, 500, 2_000] {
        group.bench_with_input(
            BenchmarkId::new("forward_pass", n_steps),
            &n_steps,
            |b, &n| {
                let mut lattice = Lattice::new(n);
                b.iter(|| {
                    lattice.forward_pass(black_box(4.6), black_box(0.01), black_box(-0.0099));
                    black_box(lattice.root())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("american_rollback", n_steps),
            &n_steps,
            |b, &n| {
                let mut reference = Lattice::new(n);
                reference.forward_pass_symmetric(100.0_f64.ln(), 0.2 / (n as f64).sqrt());
                let mut values = Lattice::new(n);
                b.iter(|| {
                    values.multiplicative_rollback(&reference, black_box(0.5), black_box(0.4999), &payoff);
                    black_box(values.root())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark end-to-end American put pricing per scheme.
fn bench_lattice_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_models");
    let contract = atm_contract();

    for model in LatticeModel::ALL {
        group.bench_with_input(BenchmarkId::new("american_put_500", model), &model, |b, &m| {
            b.iter(|| {
                price_lattice_unchecked(
                    black_box(&contract),
                    500,
                    m,
                    ExerciseStyle::American,
                    OptionType::Put,
                )
            });
        });
    }

    group.finish();
}

/// Benchmark Monte Carlo sampling with varying draw counts.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(30);

    let engine = MonteCarloEngine::default();
    let call = PayoffEvaluator::from_normal_params(PayoffKind::Call, &atm_contract());
    let digital = PayoffEvaluator::from_normal_params(PayoffKind::DigitalCall, &atm_contract());

    for n_draws in [10_000, 100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("vanilla_call", n_draws),
            &n_draws,
            |b, &n| b.iter(|| engine.simulate(black_box(&call), n)),
        );
        group.bench_with_input(
            BenchmarkId::new("digital_call", n_draws),
            &n_draws,
            |b, &n| b.iter(|| engine.simulate(black_box(&digital), n)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lattice_passes,
    bench_lattice_models,
    bench_monte_carlo
);
criterion_main!(benches);
