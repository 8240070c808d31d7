//! Subscriber installation for the binary.

use ashvale_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Builds the filter: `RUST_LOG` when set, else the configured level.
///
/// # Errors
///
/// Returns a `Config` error if the configured level is not a valid directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => level_filter(&config.level),
    }
}

fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| Error::config(format!("invalid log level {level:?}: {e}")))
}

/// Installs the global subscriber. Logs go to stderr so game text on
/// stdout stays clean.
///
/// # Errors
///
/// Returns a `Config` error if the level is invalid or a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| Error::config(format!("failed to install log subscriber: {e}")))
}
