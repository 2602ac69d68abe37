//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, VERSION};

static INIT: Once = Once::new();

/// Initialize the Causeway tracing/logging system.
///
/// Reads the `CAUSEWAY_LOG` environment variable for per-crate log levels.
/// Format: `CAUSEWAY_LOG=causeway_engine=debug,causeway_grader=info`
///
/// Falls back to `causeway=info` if `CAUSEWAY_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CAUSEWAY_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter, false);
    });
}

/// Initialize tracing from an [`ObservabilityConfig`]. `CAUSEWAY_LOG` still
/// takes precedence over `log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CAUSEWAY_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        install(EnvFilter::new(filter), false);
    });
}

fn install(filter: EnvFilter, json: bool) {
    // try_init: an embedding application may already own the global subscriber.
    let result = if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
    };
    match result {
        Ok(()) => ::tracing::info!(version = VERSION, json, "tracing initialized"),
        Err(e) => ::tracing::debug!(error = %e, "tracing subscriber already installed"),
    }
}
