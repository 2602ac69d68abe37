//! Graph grading errors.

use super::error_code::{self, CausewayErrorCode};

/// Errors from the graph equality checker.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradingError {
    #[error("invalid guess format: {reason}")]
    InvalidGuessFormat { reason: String },
}

impl GradingError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGuessFormat {
            reason: reason.into(),
        }
    }
}

impl CausewayErrorCode for GradingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidGuessFormat { .. } => error_code::INVALID_GUESS_FORMAT,
        }
    }
}

/// Result type for grading operations.
pub type GradingResult<T> = Result<T, GradingError>;
