//! Top-level Causeway configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GradingConfig, ObservabilityConfig, SamplingConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAUSEWAY_*`)
/// 2. Project config (`causeway.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CausewayConfig {
    pub sampling: SamplingConfig,
    pub grading: GradingConfig,
    pub observability: ObservabilityConfig,
}

impl CausewayConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            config = Self::read_toml_file(&project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|source| ConfigError::Parse {
            origin: "inline TOML".to_string(),
            source,
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CausewayConfig) -> Result<(), ConfigError> {
        if config.sampling.max_samples == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sampling.max_samples",
                reason: "must be greater than 0",
            });
        }
        if config.grading.unwrap_passes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "grading.unwrap_passes",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    fn read_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Apply environment variable overrides.
    /// Unparsable values are ignored and the lower layer wins.
    fn apply_env_overrides(config: &mut CausewayConfig) {
        if let Ok(val) = std::env::var("CAUSEWAY_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.sampling.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSEWAY_MAX_SAMPLES") {
            if let Ok(v) = val.parse::<usize>() {
                config.sampling.max_samples = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSEWAY_STRICT_INTERVENTIONS") {
            if let Ok(v) = val.parse::<bool>() {
                config.sampling.strict_interventions = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSEWAY_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
