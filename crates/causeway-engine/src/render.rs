//! Visualization Adapter: Graphviz DOT text for a causal graph.
//!
//! Private markers are stripped from displayed labels only; node identity
//! and edges are untouched. Layout and rasterization are left to Graphviz.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};

use causeway_core::constants::PRIVATE_MARKER;

use crate::graph::CausalGraph;

/// Label shown for `name`: leading and trailing private markers removed.
pub fn display_label(name: &str) -> &str {
    name.trim_matches(PRIVATE_MARKER)
}

pub fn to_dot(graph: &CausalGraph) -> String {
    let labelled = graph
        .dag()
        .map(|_, name| display_label(name).to_string(), |_, _| "");
    format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
}

/// Nodes grouped by longest distance from a root, for layered layouts.
/// Within a layer, nodes keep their final order.
pub fn layers(graph: &CausalGraph) -> Vec<Vec<&str>> {
    let Some(topo) = graph.topological_order() else {
        return Vec::new();
    };
    let mut depth: HashMap<&str, usize> = HashMap::with_capacity(topo.len());
    for name in topo {
        let level = graph
            .ancestors(name)
            .into_iter()
            .flatten()
            .filter_map(|parent| depth.get(parent.as_str()))
            .map(|d| d + 1)
            .max()
            .unwrap_or(0);
        depth.insert(name, level);
    }

    let height = depth.values().max().map_or(0, |d| d + 1);
    let mut layers = vec![Vec::new(); height];
    for name in graph.node_names() {
        if let Some(&level) = depth.get(name.as_str()) {
            layers[level].push(name.as_str());
        }
    }
    layers
}
