//! The causal graph recovered from one run.
//!
//! Wraps a `petgraph` `DiGraph` whose node indices follow the run's final
//! order, plus the name-keyed parent/child lists recorded while the model
//! declared its nodes.

pub mod assembler;

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef, Reversed};

/// A directed `(parent, child)` pair.
pub type Edge = (String, String);

/// The underlying directed graph type. Node weights are node names.
pub type NameGraph = DiGraph<String, ()>;

#[derive(Debug, Clone)]
pub struct CausalGraph {
    order: Vec<String>,
    index: HashMap<String, NodeIndex>,
    parents: HashMap<String, Vec<String>>,
    children: HashMap<String, Vec<String>>,
    dag: NameGraph,
}

impl CausalGraph {
    pub(crate) fn build(
        order: Vec<String>,
        parents: HashMap<String, Vec<String>>,
        children: HashMap<String, Vec<String>>,
    ) -> Self {
        let mut dag = NameGraph::with_capacity(order.len(), parents.values().map(Vec::len).sum());
        let mut index = HashMap::with_capacity(order.len());
        for name in &order {
            index.insert(name.clone(), dag.add_node(name.clone()));
        }
        for child in &order {
            for parent in parents.get(child).into_iter().flatten() {
                if let (Some(&from), Some(&to)) = (index.get(parent), index.get(child)) {
                    dag.add_edge(from, to, ());
                }
            }
        }

        Self {
            order,
            index,
            parents,
            children,
            dag,
        }
    }

    /// Direct parents of `name`, in first-read order.
    pub fn ancestors(&self, name: &str) -> Option<&[String]> {
        self.parents.get(name).map(Vec::as_slice)
    }

    /// Direct children of `name`, in declaration order.
    pub fn descendants(&self, name: &str) -> Option<&[String]> {
        self.children.get(name).map(Vec::as_slice)
    }

    pub fn ancestors_map(&self) -> &HashMap<String, Vec<String>> {
        &self.parents
    }

    pub fn descendants_map(&self) -> &HashMap<String, Vec<String>> {
        &self.children
    }

    pub fn edges(&self) -> BTreeSet<Edge> {
        self.dag
            .edge_references()
            .map(|e| (self.dag[e.source()].clone(), self.dag[e.target()].clone()))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.dag.edge_count()
    }

    /// Square 0/1 matrix in final order: `m[i][j] == 1` iff node `i` is a
    /// direct parent of node `j`.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.order.len();
        let mut matrix = vec![vec![0_u8; n]; n];
        for edge in self.dag.edge_references() {
            matrix[edge.source().index()][edge.target().index()] = 1;
        }
        matrix
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Node names in final order.
    pub fn node_names(&self) -> &[String] {
        &self.order
    }

    /// Position of `name` in the final order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|idx| idx.index())
    }

    /// Every node with a directed path to `name` (transitive parents).
    pub fn ancestor_closure(&self, name: &str) -> BTreeSet<String> {
        let Some(&start) = self.index.get(name) else {
            return BTreeSet::new();
        };
        let reversed = Reversed(&self.dag);
        let mut dfs = Dfs::new(reversed, start);
        let mut closure = BTreeSet::new();
        while let Some(node) = dfs.next(reversed) {
            if node != start {
                closure.insert(self.dag[node].clone());
            }
        }
        closure
    }

    /// A parents-before-children order, or `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<&str>> {
        toposort(&self.dag, None)
            .ok()
            .map(|nodes| nodes.into_iter().map(|n| self.dag[n].as_str()).collect())
    }

    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.dag)
    }

    /// The underlying petgraph graph; node `i` is `node_names()[i]`.
    pub fn dag(&self) -> &NameGraph {
        &self.dag
    }
}
