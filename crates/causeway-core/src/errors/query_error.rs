//! Textual query protocol errors (grading desk side).

use super::error_code::{self, CausewayErrorCode};

/// Errors raised while interpreting a free-form query subject line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("cannot parse subject line: '{subject}'")]
    Unrecognized { subject: String },

    #[error("invalid sample count: '{raw}'")]
    InvalidSampleCount { raw: String },

    #[error("cannot extract setting {key}={value}")]
    InvalidSetting { key: String, value: String },

    #[error("guess query contains no edge list")]
    MissingGuess,

    #[error("sender '{sender}' is not allowed access")]
    SenderNotAllowed { sender: String },
}

impl CausewayErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SenderNotAllowed { .. } => error_code::SENDER_NOT_ALLOWED,
            _ => error_code::QUERY_ERROR,
        }
    }
}
