//! Per-sender counters and competition scoring.

use serde::{Deserialize, Serialize};

use causeway_core::config::GradingConfig;

/// What one sender has done so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTally {
    pub emails: u64,
    pub experiments: u64,
    pub samples: u64,
    pub guesses: u64,
    pub incorrect_guesses: u64,
    /// Snapshot taken at the first correct guess.
    pub completed: Option<Completion>,
}

/// Counters frozen when a sender first guesses the graph correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub experiments: u64,
    pub samples: u64,
    pub incorrect_guesses: u64,
}

impl UserTally {
    pub fn record_message(&mut self) {
        self.emails += 1;
    }

    pub fn record_experiment(&mut self, n_samples: usize) {
        self.experiments += 1;
        self.samples += n_samples as u64;
    }

    pub fn record_guess(&mut self, correct: bool) {
        self.guesses += 1;
        if !correct {
            self.incorrect_guesses += 1;
        } else if self.completed.is_none() {
            self.completed = Some(Completion {
                experiments: self.experiments,
                samples: self.samples,
                incorrect_guesses: self.incorrect_guesses,
            });
        }
    }

    pub fn is_done(&self) -> bool {
        self.completed.is_some()
    }

    /// Competition cost; `None` until the sender has completed.
    pub fn score(&self, grading: &GradingConfig) -> Option<u64> {
        self.completed.map(|c| c.score(grading))
    }
}

impl Completion {
    /// Lower is better.
    pub fn score(&self, grading: &GradingConfig) -> u64 {
        self.experiments * grading.effective_experiment_cost()
            + self.samples * grading.effective_sample_cost()
            + self.incorrect_guesses * grading.effective_incorrect_guess_cost()
    }
}
