//! Grading configuration: guess parsing and competition scoring.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXPERIMENT_COST, DEFAULT_INCORRECT_GUESS_COST, DEFAULT_SAMPLE_COST,
    DEFAULT_UNWRAP_PASSES,
};

/// Configuration for the graph checker and the grading desk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GradingConfig {
    /// Literal-unwrap passes applied to textual guesses. Default: 3.
    pub unwrap_passes: Option<usize>,
    /// Score cost of one experiment. Default: 20.
    pub experiment_cost: Option<u64>,
    /// Score cost of one sample. Default: 1.
    pub sample_cost: Option<u64>,
    /// Score cost of one incorrect guess. Default: 70.
    pub incorrect_guess_cost: Option<u64>,
    /// Senders served by the grading desk. Empty means everyone.
    pub allowed_senders: Vec<String>,
}

impl GradingConfig {
    pub fn effective_unwrap_passes(&self) -> usize {
        self.unwrap_passes.unwrap_or(DEFAULT_UNWRAP_PASSES)
    }

    pub fn effective_experiment_cost(&self) -> u64 {
        self.experiment_cost.unwrap_or(DEFAULT_EXPERIMENT_COST)
    }

    pub fn effective_sample_cost(&self) -> u64 {
        self.sample_cost.unwrap_or(DEFAULT_SAMPLE_COST)
    }

    pub fn effective_incorrect_guess_cost(&self) -> u64 {
        self.incorrect_guess_cost
            .unwrap_or(DEFAULT_INCORRECT_GUESS_COST)
    }

    /// Whether `sender` may use the grading desk. Comparison ignores
    /// surrounding whitespace and ASCII case.
    pub fn is_allowed(&self, sender: &str) -> bool {
        if self.allowed_senders.is_empty() {
            return true;
        }
        let sender = sender.trim();
        self.allowed_senders
            .iter()
            .any(|allowed| allowed.trim().eq_ignore_ascii_case(sender))
    }
}
