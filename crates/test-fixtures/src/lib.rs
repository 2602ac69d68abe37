//! Reference causal models shared by tests and benches.

use causeway_core::ModelResult;
use causeway_engine::{CausalModel, Distributions, Run};

/// Secret of [`ExperimentModel`].
pub const EXPERIMENT_SECRET: &str = "Open_Sesame";

/// `A -> B` with `B = 2A + 1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChainModel;

impl CausalModel for ChainModel {
    fn define(&self, run: &mut Run) -> ModelResult<()> {
        let a = run.normal(0.0, 1.0)?;
        run.define("A", a)?;
        run.define_with("B", |s| Ok(s.read("A")? * 2.0 + 1.0))
    }
}

/// Seven nodes with a hidden confounder `_H` of `I`, and a final ordering
/// that hides the declaration order.
///
/// Edges: `X -> G`, `F -> G`, `F -> I`, `_H -> I`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExperimentModel;

impl ExperimentModel {
    pub const ORDERING: [&'static str; 7] = ["I", "Z", "F", "_H", "X", "G", "Y"];
}

impl CausalModel for ExperimentModel {
    fn define(&self, run: &mut Run) -> ModelResult<()> {
        let x = run.normal(2.0, 3.0)?;
        run.define("X", x)?;
        let y = run.binary(0.8)?;
        run.define("Y", y)?;
        let z = run.categorical(&[7.0, 2.0, 1.0])?;
        run.define("Z", z)?;
        let f = run.beta(5.0, 3.0)?;
        run.define("F", f)?;

        run.define_with("G", |s| {
            let slope = s.normal(0.0, 1.0)?;
            Ok(slope * s.read("X")? + s.read("F")?)
        })?;

        let h = run.normal(0.0, 1.0)?;
        run.define("_H", h)?;

        run.define_with("I", |s| {
            let noise = s.normal(0.0, 0.2)?;
            Ok(s.read("F")? + s.read("_H")? + noise)
        })?;

        run.set_ordering(Self::ORDERING)
    }

    fn secret(&self) -> Option<&str> {
        Some(EXPERIMENT_SECRET)
    }

    fn name(&self) -> &str {
        "experiment"
    }
}

/// A model built from a parent list: node `i` reads `parents[i]` (indices
/// below `i`, repeats allowed) and is named `N{i}`, or `_N{i}` when
/// `private[i]` is set.
#[derive(Debug, Clone, Default)]
pub struct ParentListModel {
    pub parents: Vec<Vec<usize>>,
    pub private: Vec<bool>,
}

impl ParentListModel {
    pub fn new(parents: Vec<Vec<usize>>, private: Vec<bool>) -> Self {
        Self { parents, private }
    }

    pub fn node_name(&self, index: usize) -> String {
        if self.private.get(index).copied().unwrap_or(false) {
            format!("_N{index}")
        } else {
            format!("N{index}")
        }
    }

    /// Distinct `(parent, child)` name pairs this model should produce.
    pub fn expected_edges(&self) -> std::collections::BTreeSet<(String, String)> {
        self.parents
            .iter()
            .enumerate()
            .flat_map(|(child, parents)| {
                parents
                    .iter()
                    .filter(move |p| **p < child)
                    .map(move |p| (self.node_name(*p), self.node_name(child)))
            })
            .collect()
    }
}

impl CausalModel for ParentListModel {
    fn define(&self, run: &mut Run) -> ModelResult<()> {
        for (index, parents) in self.parents.iter().enumerate() {
            let name = self.node_name(index);
            let parent_names: Vec<String> = parents
                .iter()
                .filter(|p| **p < index)
                .map(|p| self.node_name(*p))
                .collect();
            run.define_with(&name, |s| {
                let mut total = s.normal(0.0, 1.0)?;
                for parent in &parent_names {
                    total = total + s.read(parent)?;
                }
                Ok(total)
            })?;
        }
        Ok(())
    }
}
