//! Logging setup for `issue_tracker`.
//!
//! Library code only emits `tracing` events. Applications embedding the
//! tracker call [`init_logging`] once to install a subscriber that writes
//! to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};
use crate::error::{Result, TrackerError};

/// Build the event filter. `RUST_LOG` wins over the configured level.
///
/// # Errors
///
/// Returns `Config` if the configured level is not a valid filter directive.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| TrackerError::config(format!("invalid log level '{}': {e}", config.level)))
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when a global subscriber was already set, which
/// leaves the existing one in place.
///
/// # Errors
///
/// Returns `Config` if the configured level cannot be parsed.
pub fn init_logging(config: &LogConfig) -> Result<bool> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(format = %config.format, level = %config.level, "logging initialized");
    }
    Ok(installed)
}
