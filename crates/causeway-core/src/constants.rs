//! Shared constants for Causeway.

/// Causeway version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifiers starting with this character are private (hidden) nodes.
pub const PRIVATE_MARKER: char = '_';

/// Sample count of the bootstrap run performed when a system is constructed.
pub const BOOTSTRAP_SAMPLES: usize = 1;

/// Default upper bound on samples per run.
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

/// Default number of literal-unwrap passes applied to a textual guess.
pub const DEFAULT_UNWRAP_PASSES: usize = 3;

/// Deepest bracket nesting accepted in a textual guess.
pub const MAX_GUESS_NESTING: usize = 64;

/// Default competition cost of one experiment.
pub const DEFAULT_EXPERIMENT_COST: u64 = 20;

/// Default competition cost of one sample.
pub const DEFAULT_SAMPLE_COST: u64 = 1;

/// Default competition cost of one incorrect guess.
pub const DEFAULT_INCORRECT_GUESS_COST: u64 = 70;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "causeway.toml";

/// Default tracing filter when `CAUSEWAY_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "causeway=info";

/// Returns true if `name` denotes a private node.
pub fn is_private(name: &str) -> bool {
    name.starts_with(PRIVATE_MARKER)
}
