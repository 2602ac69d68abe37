//! Run-level sampling errors.

use super::error_code::{self, CausewayErrorCode};
use super::{ConfigError, ModelError};

/// Errors that can end a sampling run.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("model definition error: {0}")]
    Model(#[from] ModelError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("sample count {requested} out of range (1..={max})")]
    InvalidSampleCount { requested: usize, max: usize },

    #[error("invalid intervention on '{name}': {reason}")]
    InvalidIntervention { name: String, reason: String },

    #[error("intervention on '{name}' matches no declared variable")]
    UnknownIntervention { name: String },
}

impl CausewayErrorCode for SampleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::InvalidSampleCount { .. } => error_code::INVALID_SAMPLE_COUNT,
            Self::InvalidIntervention { .. } => error_code::INVALID_INTERVENTION,
            Self::UnknownIntervention { .. } => error_code::UNKNOWN_INTERVENTION,
        }
    }
}

/// Result type for sampling operations.
pub type SampleResult<T> = Result<T, SampleError>;
