//! Model-definition errors.
//!
//! These indicate the static model is invalid. They are fatal for the run
//! that hit them and are never retried.

use super::error_code::{self, CausewayErrorCode};

/// Errors raised while a model declares its nodes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("variable '{name}' is already declared in this run")]
    DuplicateVariable { name: String },

    #[error("variable '{name}' has not been declared")]
    UnknownVariable { name: String },

    #[error(
        "ordering must contain every declared node exactly once; \
         difference: {difference:?}, duplicated: {duplicates:?}"
    )]
    OrderingMismatch {
        /// Symmetric difference between the declared set and the proposed ordering.
        difference: Vec<String>,
        /// Names that appear more than once in the proposed ordering.
        duplicates: Vec<String>,
    },

    #[error("variable '{name}' has {actual} values, expected {expected} or 1")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {distribution} distribution: {reason}")]
    InvalidDistribution {
        distribution: &'static str,
        reason: String,
    },
}

impl CausewayErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateVariable { .. } => error_code::DUPLICATE_VARIABLE,
            Self::UnknownVariable { .. } => error_code::UNKNOWN_VARIABLE,
            Self::OrderingMismatch { .. } => error_code::ORDERING_MISMATCH,
            Self::LengthMismatch { .. } => error_code::LENGTH_MISMATCH,
            Self::InvalidDistribution { .. } => error_code::INVALID_DISTRIBUTION,
        }
    }
}

/// Result type for model-definition operations.
pub type ModelResult<T> = Result<T, ModelError>;
