//! Graph Equality Checker.
//!
//! A guess is graded against two precomputed truths: every edge, and every
//! edge not touching a private node. Matching either is correct, so hidden
//! confounders are optional to discover. Both truths and the guess are
//! lower-cased, so comparison is case-insensitive.

pub mod guess;
pub mod literal;

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use causeway_core::constants::is_private;
use causeway_core::errors::GradingResult;

use crate::graph::{CausalGraph, Edge};

pub use guess::EdgeGuess;

/// Which truth a guess matched. Modes are tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GradingMode {
    Full,
    VisibleOnly,
}

impl GradingMode {
    pub const ORDER: [GradingMode; 2] = [GradingMode::Full, GradingMode::VisibleOnly];
}

/// The two accepted edge sets of one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundTruth {
    full: BTreeSet<Edge>,
    visible_only: BTreeSet<Edge>,
}

impl GroundTruth {
    pub fn from_graph(graph: &CausalGraph) -> Self {
        Self::from_edges(graph.edges())
    }

    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let full: BTreeSet<Edge> = edges
            .into_iter()
            .map(|(from, to)| (from.to_lowercase(), to.to_lowercase()))
            .collect();
        let visible_only = full
            .iter()
            .filter(|(from, to)| !is_private(from) && !is_private(to))
            .cloned()
            .collect();
        Self { full, visible_only }
    }

    pub fn edges(&self, mode: GradingMode) -> &BTreeSet<Edge> {
        match mode {
            GradingMode::Full => &self.full,
            GradingMode::VisibleOnly => &self.visible_only,
        }
    }

    /// First mode whose truth equals the normalized guess.
    pub fn matches(&self, normalized: &BTreeSet<Edge>) -> Option<GradingMode> {
        GradingMode::ORDER
            .into_iter()
            .find(|mode| self.edges(*mode) == normalized)
    }

    pub fn check(&self, guess: &EdgeGuess, unwrap_passes: usize) -> GradingResult<bool> {
        Ok(self.grade(guess, unwrap_passes)?.correct)
    }

    pub fn grade(&self, guess: &EdgeGuess, unwrap_passes: usize) -> GradingResult<GradeReport> {
        let normalized = guess.normalize(unwrap_passes)?;
        let matched = self.matches(&normalized);

        // Diagnostics never name private nodes: missing edges come from the
        // visible truth, spurious ones are checked against the full truth.
        let missing = self.visible_only.difference(&normalized).cloned().collect();
        let spurious = normalized.difference(&self.full).cloned().collect();

        let report = GradeReport {
            correct: matched.is_some(),
            matched,
            missing,
            spurious,
        };
        debug!(
            correct = report.correct,
            matched = ?report.matched,
            missing = report.missing.len(),
            spurious = report.spurious.len(),
            "graded guess"
        );
        Ok(report)
    }
}

/// Outcome of grading one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub correct: bool,
    pub matched: Option<GradingMode>,
    /// Visible edges absent from the guess.
    pub missing: BTreeSet<Edge>,
    /// Guessed edges absent from the graph.
    pub spurious: BTreeSet<Edge>,
}
