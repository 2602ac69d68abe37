//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, CausewayErrorCode};

/// Why a `CausewayConfig` could not be produced or accepted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not a valid causeway config: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("config cannot be written as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{field} {reason}")]
    ValidationFailed {
        field: &'static str,
        reason: &'static str,
    },
}

impl CausewayErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
