//! Configuration system for Causeway.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod causeway_config;
pub mod grading_config;
pub mod observability_config;
pub mod sampling_config;

pub use causeway_config::CausewayConfig;
pub use grading_config::GradingConfig;
pub use observability_config::ObservabilityConfig;
pub use sampling_config::SamplingConfig;
