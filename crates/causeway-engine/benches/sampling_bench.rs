//! Sampling and graph-assembly benchmarks.
//!
//! Run with: cargo bench -p causeway-engine --bench sampling_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use causeway_core::CausewayConfig;
use causeway_engine::{CausalSystem, Interventions};
use test_fixtures::{ExperimentModel, ParentListModel};

fn seeded() -> CausewayConfig {
    let mut config = CausewayConfig::default();
    config.sampling.seed = Some(7);
    config
}

/// A layered model where every node reads the two before it.
fn ladder(n: usize) -> ParentListModel {
    let parents = (0..n)
        .map(|i| (i.saturating_sub(2)..i).collect())
        .collect();
    ParentListModel::new(parents, vec![false; n])
}

fn experiment_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("experiment_sample");
    let system = CausalSystem::with_config(ExperimentModel, &seeded()).unwrap();
    let none = Interventions::new();
    let fixed = Interventions::new().with("F", 0.5);

    for size in [100_usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("observational", size), &size, |b, &n| {
            b.iter(|| system.sample(n, &none, None).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("intervened", size), &size, |b, &n| {
            b.iter(|| system.sample(n, &fixed, None).unwrap());
        });
    }
    group.finish();
}

fn graph_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_assembly");
    for nodes in [10_usize, 100, 500] {
        let system = CausalSystem::with_config(ladder(nodes), &seeded()).unwrap();
        group.bench_with_input(BenchmarkId::new("ladder", nodes), &nodes, |b, _| {
            b.iter(|| system.sample_run(1, &Interventions::new()).unwrap());
        });
    }
    group.finish();
}

fn grading(c: &mut Criterion) {
    let system = CausalSystem::with_config(ExperimentModel, &seeded()).unwrap();
    let guess = "[('X', 'G'), ('F', 'G'), ('F', 'I'), ('_H', 'I')]";
    c.bench_function("grade_text_guess", |b| {
        b.iter(|| system.check_correct_graph(guess).unwrap());
    });
}

criterion_group!(benches, experiment_sampling, graph_assembly, grading);
criterion_main!(benches);
