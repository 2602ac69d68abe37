//! `CausalSystem`: a model definition plus the graph of its latest run.
//!
//! Each `sample` call builds its own [`Run`], so one system can be sampled
//! from several threads through `&self`. The recovered graph is published
//! after every run, replacing the previous one wholesale; readers always
//! see the graph of some complete run.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use causeway_core::config::SamplingConfig;
use causeway_core::constants::BOOTSTRAP_SAMPLES;
use causeway_core::errors::{GradingResult, SampleError, SampleResult};
use causeway_core::CausewayConfig;

use crate::grading::{EdgeGuess, GradeReport, GroundTruth};
use crate::graph::{CausalGraph, Edge};
use crate::interventions::Interventions;
use crate::model::CausalModel;
use crate::render;
use crate::run::{Run, RunOutput};
use crate::table::SampleTable;
use crate::visibility::Visibility;

/// Graph of the latest run and the truth derived from it.
#[derive(Debug)]
struct Published {
    graph: Arc<CausalGraph>,
    truth: GroundTruth,
}

impl Published {
    fn new(graph: Arc<CausalGraph>) -> Self {
        let truth = GroundTruth::from_graph(&graph);
        Self { graph, truth }
    }
}

pub struct CausalSystem<M> {
    model: M,
    sampling: SamplingConfig,
    unwrap_passes: usize,
    rng: Mutex<StdRng>,
    latest: RwLock<Arc<Published>>,
}

impl<M: CausalModel> CausalSystem<M> {
    /// Wrap `model` with default configuration. Runs the model once, so a
    /// malformed definition fails here rather than on first use.
    pub fn new(model: M) -> SampleResult<Self> {
        Self::with_config(model, &CausewayConfig::default())
    }

    /// Wrap `model` with `config`, which is validated first.
    pub fn with_config(model: M, config: &CausewayConfig) -> SampleResult<Self> {
        CausewayConfig::validate(config)?;
        let mut rng = match config.sampling.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let child = StdRng::seed_from_u64(rng.gen());
        let bootstrap = execute(&model, BOOTSTRAP_SAMPLES, &Interventions::new(), false, child)?;
        debug!(
            model = model.name(),
            nodes = bootstrap.graph().node_count(),
            "bootstrap run complete"
        );

        Ok(Self {
            model,
            sampling: config.sampling.clone(),
            unwrap_passes: config.grading.effective_unwrap_passes(),
            rng: Mutex::new(rng),
            latest: RwLock::new(Arc::new(Published::new(Arc::clone(bootstrap.graph())))),
        })
    }

    /// Draw `n_samples` rows. Private columns are included only when
    /// `secret` matches the model's secret.
    pub fn sample(
        &self,
        n_samples: usize,
        interventions: &Interventions,
        secret: Option<&str>,
    ) -> SampleResult<SampleTable> {
        let output = self.sample_run(n_samples, interventions)?;
        let visibility = Visibility::resolve(self.model.secret(), secret);
        let table = output.table(visibility);
        info!(
            model = self.model.name(),
            n_samples,
            nodes = output.graph().node_count(),
            edges = output.graph().edge_count(),
            columns = table.n_columns(),
            interventions = interventions.len(),
            "sampled"
        );
        Ok(table)
    }

    /// Like [`sample`](Self::sample) but returns every node, private ones
    /// included, with the run's graph.
    pub fn sample_run(
        &self,
        n_samples: usize,
        interventions: &Interventions,
    ) -> SampleResult<RunOutput> {
        let max = self.sampling.effective_max_samples();
        if n_samples == 0 || n_samples > max {
            return Err(SampleError::InvalidSampleCount {
                requested: n_samples,
                max,
            });
        }

        let output = execute(
            &self.model,
            n_samples,
            interventions,
            self.sampling.effective_strict_interventions(),
            self.child_rng(),
        )?;
        self.publish(Arc::clone(output.graph()));
        Ok(output)
    }

    pub fn check_correct_graph(&self, guess: impl Into<EdgeGuess>) -> GradingResult<bool> {
        Ok(self.grade(guess)?.correct)
    }

    pub fn grade(&self, guess: impl Into<EdgeGuess>) -> GradingResult<GradeReport> {
        self.latest().truth.grade(&guess.into(), self.unwrap_passes)
    }

    pub fn ground_truth(&self) -> GroundTruth {
        self.latest().truth.clone()
    }

    /// Graph of the latest completed run.
    pub fn graph(&self) -> Arc<CausalGraph> {
        Arc::clone(&self.latest().graph)
    }

    pub fn ancestors(&self, name: &str) -> Option<Vec<String>> {
        self.latest().graph.ancestors(name).map(<[String]>::to_vec)
    }

    pub fn descendants(&self, name: &str) -> Option<Vec<String>> {
        self.latest().graph.descendants(name).map(<[String]>::to_vec)
    }

    pub fn edges(&self) -> BTreeSet<Edge> {
        self.latest().graph.edges()
    }

    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        self.latest().graph.adjacency_matrix()
    }

    pub fn node_count(&self) -> usize {
        self.latest().graph.node_count()
    }

    pub fn node_names(&self) -> Vec<String> {
        self.latest().graph.node_names().to_vec()
    }

    pub fn render_dot(&self) -> String {
        render::to_dot(&self.latest().graph)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    fn latest(&self) -> Arc<Published> {
        let guard = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn publish(&self, graph: Arc<CausalGraph>) {
        let published = Arc::new(Published::new(graph));
        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = published;
    }

    /// Independent RNG for one run, drawn from the system RNG.
    fn child_rng(&self) -> StdRng {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        StdRng::seed_from_u64(rng.gen())
    }
}

fn execute<M: CausalModel>(
    model: &M,
    n_samples: usize,
    interventions: &Interventions,
    strict: bool,
    rng: StdRng,
) -> SampleResult<RunOutput> {
    let mut run = Run::new(n_samples, interventions, rng)?;
    model.define(&mut run)?;

    let unmatched = run.unmatched_interventions();
    if !unmatched.is_empty() {
        if strict {
            return Err(SampleError::UnknownIntervention {
                name: unmatched[0].to_string(),
            });
        }
        debug!(ignored = ?unmatched, "interventions matched no node");
    }

    Ok(run.finish())
}

#[cfg(test)]
mod tests {
    use causeway_core::errors::ModelError;

    use super::*;
    use crate::distributions::Distributions;

    fn chain(run: &mut Run) -> causeway_core::ModelResult<()> {
        let a = run.normal(0.0, 1.0)?;
        run.define("A", a)?;
        run.define_with("B", |s| Ok(s.read("A")? + 1.0))
    }

    fn seeded(seed: u64) -> CausewayConfig {
        let mut config = CausewayConfig::default();
        config.sampling.seed = Some(seed);
        config
    }

    #[test]
    fn bootstrap_makes_graph_available() {
        let system = CausalSystem::new(chain).unwrap();
        assert_eq!(system.node_names(), vec!["A", "B"]);
        assert_eq!(system.ancestors("B").unwrap(), vec!["A"]);
    }

    #[test]
    fn malformed_model_fails_at_construction() {
        let broken = |run: &mut Run| run.define_with("B", |s| s.read("A"));
        let err = CausalSystem::new(broken).err().unwrap();
        assert!(matches!(
            err,
            SampleError::Model(ModelError::UnknownVariable { .. })
        ));
    }

    #[test]
    fn sample_count_is_bounded() {
        let mut config = seeded(1);
        config.sampling.max_samples = Some(10);
        let system = CausalSystem::with_config(chain, &config).unwrap();
        assert!(matches!(
            system.sample(0, &Interventions::new(), None),
            Err(SampleError::InvalidSampleCount { requested: 0, .. })
        ));
        assert!(system.sample(11, &Interventions::new(), None).is_err());
        assert_eq!(system.sample(10, &Interventions::new(), None).unwrap().n_rows(), 10);
    }

    #[test]
    fn seeded_systems_are_reproducible() {
        let a = CausalSystem::with_config(chain, &seeded(42)).unwrap();
        let b = CausalSystem::with_config(chain, &seeded(42)).unwrap();
        let ta = a.sample(5, &Interventions::new(), None).unwrap();
        let tb = b.sample(5, &Interventions::new(), None).unwrap();
        assert_eq!(ta.column("A"), tb.column("A"));
    }

    #[test]
    fn strict_mode_rejects_unknown_interventions() {
        let interventions = Interventions::new().with("Q", 1.0);
        let lenient = CausalSystem::with_config(chain, &seeded(3)).unwrap();
        assert!(lenient.sample(2, &interventions, None).is_ok());

        let mut config = seeded(3);
        config.sampling.strict_interventions = Some(true);
        let strict = CausalSystem::with_config(chain, &config).unwrap();
        assert!(matches!(
            strict.sample(2, &interventions, None),
            Err(SampleError::UnknownIntervention { ref name }) if name == "Q"
        ));
    }
}
