//! Run: one sampling invocation of a causal model.
//!
//! A `Run` owns everything scoped to a single `sample` call: the sample
//! count, resolved interventions, the node store, the graph assembler and
//! the RNG. Models receive `&mut Run` and declare nodes through it; nothing
//! outlives the run except the [`RunOutput`] produced by [`Run::finish`].

pub mod ordering;
pub mod scope;
pub mod store;

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use tracing::debug;

use causeway_core::errors::{ModelError, ModelResult, SampleResult};

use crate::distributions::Distributions;
use crate::graph::assembler::GraphAssembler;
use crate::graph::CausalGraph;
use crate::interventions::Interventions;
use crate::samples::Samples;
use crate::table::SampleTable;
use crate::visibility::Visibility;

pub use scope::Scope;
pub use store::NodeStore;

pub struct Run {
    n_samples: usize,
    overrides: HashMap<String, Samples>,
    store: NodeStore,
    assembler: GraphAssembler,
    rng: StdRng,
}

impl Run {
    /// Start a run. Interventions are broadcast to `n_samples` up front, so a
    /// malformed intervention fails before the model executes.
    pub fn new(n_samples: usize, interventions: &Interventions, rng: StdRng) -> SampleResult<Self> {
        let overrides = interventions
            .iter()
            .map(|(name, value)| Ok((name.to_string(), value.broadcast(name, n_samples)?)))
            .collect::<SampleResult<HashMap<_, _>>>()?;

        Ok(Self {
            n_samples,
            overrides,
            store: NodeStore::new(),
            assembler: GraphAssembler::new(),
            rng,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Declare a root node (one with no parents).
    pub fn define(&mut self, name: &str, values: impl Into<Samples>) -> ModelResult<()> {
        self.commit(name, values.into(), Vec::new())
    }

    /// Declare a node computed from other nodes. Every node read through the
    /// scope inside `build` becomes a parent of `name`.
    pub fn define_with<F>(&mut self, name: &str, build: F) -> ModelResult<()>
    where
        F: FnOnce(&mut Scope<'_>) -> ModelResult<Samples>,
    {
        if self.store.contains(name) {
            return Err(ModelError::DuplicateVariable {
                name: name.to_string(),
            });
        }

        let mut scope = Scope::open(&self.store, &mut self.rng, self.n_samples);
        let built = build(&mut scope);
        let parents = scope.close();

        self.commit(name, built?, parents)
    }

    /// Replace the node order used for output columns and adjacency indices.
    /// Must be a permutation of the nodes declared so far; nodes declared
    /// afterwards are appended.
    pub fn set_ordering<I, S>(&mut self, order: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order: Vec<String> = order.into_iter().map(Into::into).collect();
        ordering::validate_ordering(self.store.order(), &order)?;
        self.store.reorder(order);
        Ok(())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    /// Nodes declared so far, in current order.
    pub fn node_names(&self) -> &[String] {
        self.store.order()
    }

    /// Intervention keys that matched no declared node.
    pub fn unmatched_interventions(&self) -> Vec<&str> {
        let mut unmatched: Vec<&str> = self
            .overrides
            .keys()
            .map(String::as_str)
            .filter(|name| !self.store.contains(name))
            .collect();
        unmatched.sort_unstable();
        unmatched
    }

    /// Close the run and assemble its graph.
    pub fn finish(self) -> RunOutput {
        let (order, values) = self.store.into_parts();
        let graph = Arc::new(self.assembler.assemble(&order));
        RunOutput {
            n_samples: self.n_samples,
            values,
            graph,
        }
    }

    fn commit(&mut self, name: &str, values: Samples, parents: Vec<String>) -> ModelResult<()> {
        let values = values
            .broadcast(self.n_samples)
            .ok_or_else(|| ModelError::LengthMismatch {
                name: name.to_string(),
                expected: self.n_samples,
                actual: values.len(),
            })?;

        // The intervention replaces the computed value; parents stay recorded.
        let (values, intervened) = match self.overrides.get(name) {
            Some(forced) => (forced.clone(), true),
            None => (values, false),
        };

        self.store.insert(name, values)?;
        debug!(node = name, parents = parents.len(), intervened, "declared node");
        self.assembler.record(name, parents);
        Ok(())
    }
}

impl Distributions for Run {
    fn sample_count(&self) -> usize {
        self.n_samples
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    n_samples: usize,
    values: HashMap<String, Samples>,
    graph: Arc<CausalGraph>,
}

impl RunOutput {
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Values of any node, private ones included.
    pub fn values(&self, name: &str) -> Option<&Samples> {
        self.values.get(name)
    }

    pub fn graph(&self) -> &Arc<CausalGraph> {
        &self.graph
    }

    /// Project the run into a table of the nodes `visibility` admits, in
    /// final order.
    pub fn table(&self, visibility: Visibility) -> SampleTable {
        let columns: Vec<(&str, &Samples)> = visibility
            .filter(self.graph.node_names())
            .into_iter()
            .filter_map(|name| self.values.get(name).map(|v| (name, v)))
            .collect();
        SampleTable::from_columns(self.n_samples, columns)
    }
}
