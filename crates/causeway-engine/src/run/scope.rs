//! Declaration scope: records which nodes are read while one node is built.
//!
//! A scope is opened by [`Run::define_with`](super::Run::define_with) and
//! owns the parent accumulator for that single declaration. It is consumed
//! when the builder returns, on success and on error alike, so no reads can
//! leak into a later declaration.

use rand::rngs::StdRng;

use causeway_core::errors::ModelResult;

use super::store::NodeStore;
use crate::distributions::Distributions;
use crate::samples::Samples;

pub struct Scope<'r> {
    store: &'r NodeStore,
    rng: &'r mut StdRng,
    n_samples: usize,
    parents: Vec<String>,
}

impl<'r> Scope<'r> {
    pub(crate) fn open(store: &'r NodeStore, rng: &'r mut StdRng, n_samples: usize) -> Self {
        Self {
            store,
            rng,
            n_samples,
            parents: Vec::new(),
        }
    }

    /// Read a declared node and record it as a parent of the node being built.
    /// Repeated reads record the parent once, at its first read.
    pub fn read(&mut self, name: &str) -> ModelResult<Samples> {
        let values = self.store.get(name)?.clone();
        if !self.parents.iter().any(|p| p == name) {
            self.parents.push(name.to_string());
        }
        Ok(values)
    }

    /// Parents recorded so far, in first-read order.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub(crate) fn close(self) -> Vec<String> {
        self.parents
    }
}

impl Distributions for Scope<'_> {
    fn sample_count(&self) -> usize {
        self.n_samples
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut *self.rng
    }
}
