//! Sampling configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_SAMPLES;

/// Configuration for sampling runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// RNG seed. When unset, each system is seeded from entropy.
    pub seed: Option<u64>,
    /// Upper bound on samples per run. Default: 1_000_000.
    pub max_samples: Option<usize>,
    /// Reject interventions naming undeclared variables. Default: false.
    pub strict_interventions: Option<bool>,
}

impl SamplingConfig {
    /// Returns the effective max samples per run.
    pub fn effective_max_samples(&self) -> usize {
        self.max_samples.unwrap_or(DEFAULT_MAX_SAMPLES)
    }

    /// Returns whether unknown intervention keys are an error.
    pub fn effective_strict_interventions(&self) -> bool {
        self.strict_interventions.unwrap_or(false)
    }
}
