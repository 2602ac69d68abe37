//! Error handling for Causeway.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod grading_error;
pub mod model_error;
pub mod query_error;
pub mod sample_error;

pub use config_error::ConfigError;
pub use error_code::CausewayErrorCode;
pub use grading_error::{GradingError, GradingResult};
pub use model_error::{ModelError, ModelResult};
pub use query_error::QueryError;
pub use sample_error::{SampleError, SampleResult};
