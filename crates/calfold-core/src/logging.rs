//! Tracing subscriber bootstrap.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the log filter for the configured level directive.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the directive cannot be parsed.
pub fn env_filter(config: &LoggingConfig) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(config.level.as_str())
        .map_err(|e| CoreError::ConfigError(format!("invalid log level {:?}: {e}", config.level)))
}

/// ## Summary
/// Installs the global tracing subscriber with the configured filter.
///
/// ## Errors
/// Returns an error if the level directive is invalid or a global subscriber
/// has already been installed.
pub fn try_init_logging(config: &LoggingConfig) -> CoreResult<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| CoreError::LoggingError(e.to_string()))?;

    tracing::debug!(level = %config.level, "Logging initialized");

    Ok(())
}
