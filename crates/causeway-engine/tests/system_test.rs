//! Sampling, intervention, visibility and graph recovery through
//! `CausalSystem`.

use std::collections::BTreeSet;

use causeway_core::errors::{ModelError, SampleError};
use causeway_core::{CausewayConfig, ModelResult};
use causeway_engine::{
    CausalSystem, Distributions, Intervention, Interventions, Run, Samples,
};
use test_fixtures::{ChainModel, ExperimentModel, EXPERIMENT_SECRET};

fn seeded(seed: u64) -> CausewayConfig {
    causeway_core::tracing::init_tracing();
    let mut config = CausewayConfig::default();
    config.sampling.seed = Some(seed);
    config
}

fn edge(from: &str, to: &str) -> (String, String) {
    (from.to_string(), to.to_string())
}

// =============================================================================
// Two-node chain
// =============================================================================

#[test]
fn chain_graph_after_one_sample() {
    let system = CausalSystem::with_config(ChainModel, &seeded(1)).unwrap();
    let table = system.sample(50, &Interventions::new(), None).unwrap();

    assert_eq!(table.shape(), (50, 2));
    assert_eq!(table.columns(), &["A".to_string(), "B".to_string()]);
    assert_eq!(system.ancestors("B").unwrap(), vec!["A"]);
    assert_eq!(system.descendants("A").unwrap(), vec!["B"]);
    assert!(system.ancestors("A").unwrap().is_empty());
    assert_eq!(system.edges(), BTreeSet::from([edge("A", "B")]));
    assert_eq!(system.adjacency_matrix(), vec![vec![0, 1], vec![0, 0]]);
    assert_eq!(system.node_count(), 2);

    assert!(system.check_correct_graph([("A", "B")]).unwrap());
    assert!(!system.check_correct_graph([("B", "A")]).unwrap());
}

#[test]
fn chain_values_follow_the_model() {
    let system = CausalSystem::with_config(ChainModel, &seeded(2)).unwrap();
    let table = system.sample(20, &Interventions::new(), None).unwrap();
    let a = table.column("A").unwrap();
    let b = table.column("B").unwrap();
    for (a, b) in a.iter().zip(b) {
        assert!((b - (2.0 * a + 1.0)).abs() < 1e-12);
    }
}

// =============================================================================
// Interventions
// =============================================================================

#[test]
fn intervention_fixes_column_and_propagates() {
    let system = CausalSystem::with_config(ChainModel, &seeded(3)).unwrap();
    let interventions = Interventions::new().with("A", 4.0);
    let table = system.sample(30, &interventions, None).unwrap();

    assert!(table.column("A").unwrap().iter().all(|v| *v == 4.0));
    assert!(table.column("B").unwrap().iter().all(|v| *v == 9.0));
    // The graph is unchanged by intervening.
    assert_eq!(system.edges(), BTreeSet::from([edge("A", "B")]));
}

#[test]
fn intervention_on_child_keeps_its_parents() {
    let system = CausalSystem::with_config(ChainModel, &seeded(4)).unwrap();
    let table = system
        .sample(10, &Interventions::new().with("B", -1.0), None)
        .unwrap();
    assert!(table.column("B").unwrap().iter().all(|v| *v == -1.0));
    assert_eq!(system.ancestors("B").unwrap(), vec!["A"]);
}

#[test]
fn vector_intervention_must_match_run_length() {
    let system = CausalSystem::with_config(ChainModel, &seeded(5)).unwrap();
    let good = Interventions::new().with("A", vec![1.0, 2.0, 3.0]);
    let table = system.sample(3, &good, None).unwrap();
    assert_eq!(table.column("A").unwrap(), &[1.0, 2.0, 3.0]);

    let bad = Interventions::new().with("A", Intervention::Vector(vec![1.0, 2.0]));
    assert!(matches!(
        system.sample(3, &bad, None),
        Err(SampleError::InvalidIntervention { ref name, .. }) if name == "A"
    ));
}

#[test]
fn unknown_intervention_is_ignored_by_default() {
    let system = CausalSystem::with_config(ChainModel, &seeded(6)).unwrap();
    let interventions = Interventions::new().with("nope", 1.0);
    let table = system.sample(5, &interventions, None).unwrap();
    assert_eq!(table.n_columns(), 2);
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn private_columns_need_the_secret() {
    let system = CausalSystem::with_config(ExperimentModel, &seeded(7)).unwrap();

    let public = system.sample(10, &Interventions::new(), None).unwrap();
    assert_eq!(public.columns(), &["I", "Z", "F", "X", "G", "Y"]);
    assert!(!public.has_column("_H"));

    let wrong = system
        .sample(10, &Interventions::new(), Some("open_sesame"))
        .unwrap();
    assert!(!wrong.has_column("_H"));

    let full = system
        .sample(10, &Interventions::new(), Some(EXPERIMENT_SECRET))
        .unwrap();
    assert_eq!(full.columns(), &ExperimentModel::ORDERING);
}

#[test]
fn secret_does_not_change_other_values() {
    let a = CausalSystem::with_config(ExperimentModel, &seeded(8)).unwrap();
    let b = CausalSystem::with_config(ExperimentModel, &seeded(8)).unwrap();
    let public = a.sample(25, &Interventions::new(), None).unwrap();
    let full = b
        .sample(25, &Interventions::new(), Some(EXPERIMENT_SECRET))
        .unwrap();
    for name in public.columns() {
        assert_eq!(public.column(name), full.column(name), "column {name}");
    }
}

#[test]
fn model_without_secret_never_exposes_private_nodes() {
    let model = |run: &mut Run| -> ModelResult<()> {
        run.define("_P", 1.0)?;
        run.define_with("Q", |s| s.read("_P"))
    };
    let system = CausalSystem::new(model).unwrap();
    let table = system.sample(2, &Interventions::new(), Some("")).unwrap();
    assert_eq!(table.columns(), &["Q"]);
}

// =============================================================================
// Experiment model graph
// =============================================================================

#[test]
fn experiment_graph_and_ordering() {
    let system = CausalSystem::with_config(ExperimentModel, &seeded(9)).unwrap();
    system.sample(5, &Interventions::new(), None).unwrap();

    assert_eq!(system.node_names(), ExperimentModel::ORDERING);
    assert_eq!(system.ancestors("G").unwrap(), vec!["X", "F"]);
    assert_eq!(system.ancestors("I").unwrap(), vec!["F", "_H"]);
    assert_eq!(system.descendants("F").unwrap(), vec!["G", "I"]);
    assert_eq!(
        system.edges(),
        BTreeSet::from([edge("X", "G"), edge("F", "G"), edge("F", "I"), edge("_H", "I")])
    );

    let matrix = system.adjacency_matrix();
    let graph = system.graph();
    let idx = |name: &str| graph.index_of(name).unwrap();
    assert_eq!(matrix[idx("_H")][idx("I")], 1);
    assert_eq!(matrix[idx("I")][idx("_H")], 0);
    assert_eq!(matrix.iter().flatten().filter(|v| **v == 1).count(), 4);
}

#[test]
fn experiment_value_ranges() {
    let system = CausalSystem::with_config(ExperimentModel, &seeded(10)).unwrap();
    let table = system.sample(500, &Interventions::new(), None).unwrap();
    assert!(table.column("Y").unwrap().iter().all(|v| *v == 0.0 || *v == 1.0));
    assert!(table
        .column("Z")
        .unwrap()
        .iter()
        .all(|v| [0.0, 1.0, 2.0].contains(v)));
    assert!(table.column("F").unwrap().iter().all(|v| (0.0..=1.0).contains(v)));
}

// =============================================================================
// Model-definition errors
// =============================================================================

#[test]
fn duplicate_declaration_fails_the_run() {
    let model = |run: &mut Run| -> ModelResult<()> {
        run.define("A", 1.0)?;
        run.define("A", 2.0)
    };
    assert!(matches!(
        CausalSystem::new(model).err(),
        Some(SampleError::Model(ModelError::DuplicateVariable { .. }))
    ));
}

#[test]
fn bad_ordering_reports_symmetric_difference() {
    let model = |run: &mut Run| -> ModelResult<()> {
        run.define("A", 1.0)?;
        run.define("B", 1.0)?;
        run.set_ordering(["A", "C"])
    };
    match CausalSystem::new(model).err() {
        Some(SampleError::Model(ModelError::OrderingMismatch { difference, duplicates })) => {
            assert_eq!(difference, vec!["B", "C"]);
            assert!(duplicates.is_empty());
        }
        other => panic!("expected OrderingMismatch, got {other:?}"),
    }
}

#[test]
fn length_mismatch_fails_the_run() {
    let model = |run: &mut Run| -> ModelResult<()> {
        run.define("A", Samples::from(vec![1.0, 2.0]))
    };
    assert!(matches!(
        CausalSystem::new(model).err(),
        Some(SampleError::Model(ModelError::LengthMismatch { expected: 1, actual: 2, .. }))
    ));
}

#[test]
fn scalar_values_broadcast_to_run_length() {
    let model = |run: &mut Run| -> ModelResult<()> { run.define("A", 3.0) };
    let system = CausalSystem::new(model).unwrap();
    let table = system.sample(4, &Interventions::new(), None).unwrap();
    assert_eq!(table.column("A").unwrap(), &[3.0; 4]);
}

// =============================================================================
// Run output and export
// =============================================================================

#[test]
fn sample_run_returns_private_values() {
    let system = CausalSystem::with_config(ExperimentModel, &seeded(11)).unwrap();
    let output = system.sample_run(4, &Interventions::new()).unwrap();
    assert_eq!(output.values("_H").unwrap().len(), 4);
    assert_eq!(output.n_samples(), 4);
}

#[test]
fn table_exports_csv_and_json() {
    let system = CausalSystem::with_config(ChainModel, &seeded(12)).unwrap();
    let table = system
        .sample(2, &Interventions::new().with("A", 0.5), None)
        .unwrap();

    let mut csv = Vec::new();
    table.to_csv(&mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv, ",A,B\n0,0.5,2\n1,0.5,2\n");

    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["columns"], serde_json::json!(["A", "B"]));
    assert_eq!(json["n_rows"], 2);
}

#[test]
fn dot_rendering_hides_private_markers() {
    let system = CausalSystem::with_config(ExperimentModel, &seeded(13)).unwrap();
    let dot = system.render_dot();
    assert!(dot.contains("label = \"H\""));
    assert!(!dot.contains("_H"));
}

#[test]
fn concurrent_sampling_shares_one_system() {
    let system = CausalSystem::with_config(ExperimentModel, &seeded(14)).unwrap();
    std::thread::scope(|scope| {
        for n in 1..=4 {
            let system = &system;
            scope.spawn(move || {
                let table = system.sample(n * 10, &Interventions::new(), None).unwrap();
                assert_eq!(table.n_rows(), n * 10);
            });
        }
    });
    assert_eq!(system.edges().len(), 4);
}

#[test]
fn distributions_validate_parameters() {
    let model = |run: &mut Run| -> ModelResult<()> {
        let x = run.normal(0.0, -1.0)?;
        run.define("X", x)
    };
    assert!(matches!(
        CausalSystem::new(model).err(),
        Some(SampleError::Model(ModelError::InvalidDistribution { distribution: "normal", .. }))
    ));
}
