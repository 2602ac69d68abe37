//! # causeway-core
//!
//! Foundation crate for Causeway.
//! Errors, configuration, constants, and tracing setup shared by the engine
//! and the grading desk.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::CausewayConfig;
pub use errors::{
    CausewayErrorCode, ConfigError, GradingError, GradingResult, ModelError, ModelResult,
    QueryError, SampleError, SampleResult,
};
