//! Process-wide log setup.
//!
//! Library code logs through the `log` facade. [`init_logging`] installs a
//! `tracing` subscriber and forwards `log` records into it.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::JobtrackError;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "JOBTRACK_LOG";

/// Resolves the filter: `JOBTRACK_LOG` first, then `level_override`, then
/// the configured level.
pub fn build_filter(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<EnvFilter, JobtrackError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    let directive = level_override.unwrap_or(&config.level);
    EnvFilter::try_new(directive)
        .map_err(|e| JobtrackError::Logging(format!("invalid log filter '{}': {}", directive, e)))
}

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init_logging(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<(), JobtrackError> {
    let filter = build_filter(config, level_override)?;

    tracing_log::LogTracer::init()
        .map_err(|e| JobtrackError::Logging(format!("failed to bridge log records: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };
    installed.map_err(|e| JobtrackError::Logging(e.to_string()))?;

    tracing::debug!(format = ?config.format, "logging initialized");
    Ok(())
}
