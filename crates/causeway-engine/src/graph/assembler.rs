//! Incremental edge recording during a run.

use std::collections::HashMap;

use super::CausalGraph;

/// Collects parent/child lists as nodes are declared. Both maps are written
/// from the same call, so they always describe the same edge set.
#[derive(Debug, Default)]
pub struct GraphAssembler {
    parents: HashMap<String, Vec<String>>,
    children: HashMap<String, Vec<String>>,
}

impl GraphAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly declared node and its parents. Parents are unique and
    /// were declared earlier, so no self-loop or cycle can be recorded.
    pub fn record(&mut self, node: &str, parents: Vec<String>) {
        self.children.entry(node.to_string()).or_default();
        for parent in &parents {
            self.children
                .entry(parent.clone())
                .or_default()
                .push(node.to_string());
        }
        self.parents.insert(node.to_string(), parents);
    }

    /// Freeze the recorded edges into a graph indexed by `order`.
    pub fn assemble(self, order: &[String]) -> CausalGraph {
        CausalGraph::build(order.to_vec(), self.parents, self.children)
    }
}
