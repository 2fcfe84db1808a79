//! Logging setup
//!
//! Thin wrapper over `tracing-subscriber`: an env-filter derived from the
//! configured level (overridable through `RUST_LOG`) and an optional JSON
//! output layer.

use crate::config::LoggingConfig;
use crate::utils::error::{ConsoleError, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the logging configuration.
///
/// Returns an error if a subscriber is already installed or the configured
/// level does not parse as a filter directive.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConsoleError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ConsoleError::Config(format!("Failed to install subscriber: {}", e)))
}
