//! # Telemetry
//!
//! `tracing` subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level. The format is
//! plain text or one JSON object per line.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::infrastructure::config::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the event filter from `RUST_LOG`, falling back to `default_level`.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if `default_level` is not a
/// valid filter directive.
pub fn build_filter(default_level: &str) -> ApplicationResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            ApplicationError::configuration(format!("invalid log level '{default_level}': {e}"))
        }),
    }
}

/// Installs the global subscriber.
///
/// Events are written to stderr so stdout stays clean for quote output.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the level is invalid or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> ApplicationResult<()> {
    let filter = build_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| ApplicationError::configuration(e.to_string()))
}
