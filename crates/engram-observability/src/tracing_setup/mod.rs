//! Tracing setup: structured logging with span definitions.

pub mod spans;

use engram_core::config::ObservabilityConfig;
use engram_core::{EngramError, EngramResult};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV_VAR: &str = "ENGRAM_LOG";

/// Resolve the filter: `ENGRAM_LOG` if set and valid, else the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber described by `config`.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> EngramResult<()> {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_output {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| EngramError::TracingInit {
        reason: e.to_string(),
    })
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> EngramResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init()
        .map_err(|e| EngramError::TracingInit {
            reason: e.to_string(),
        })
}
