//! # Configuration
//!
//! Layered settings for the quote service.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `shipquote.toml` in the working directory, or an explicit file
//! 3. Environment variables prefixed `SHIPQUOTE_`, nested keys split by `__`
//!
//! A `.env` file is loaded into the environment first, if present.
//!
//! ```bash
//! export SHIPQUOTE_TRACKING_PREFIX="SQ"
//! export SHIPQUOTE_CURRENCY="USD"
//! export SHIPQUOTE_LOG__LEVEL="debug"
//! export SHIPQUOTE_LOG__FORMAT="json"
//! ```
//!
//! Rate tables and delivery offsets are fixed and cannot be configured.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::value_objects::TrackingPrefix;
use crate::domain::value_objects::tracking_number::DEFAULT_PREFIX;
use config::{Config, Environment, File, FileFormat, Source};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Default configuration file name, without extension.
pub const DEFAULT_CONFIG_FILE: &str = "shipquote";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SHIPQUOTE";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Two uppercase letters leading every tracking number.
    pub tracking_prefix: String,
    /// Currency code stamped on exports.
    pub currency: String,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracking_prefix: DEFAULT_PREFIX.to_owned(),
            currency: "USD".to_owned(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads settings from defaults, the config file and the environment.
    ///
    /// With `path` set, that file must exist. Without it, `shipquote.toml`
    /// is read when present.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read,
    /// a value has the wrong type, or validation fails.
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!(path = %env_file.display(), "loaded .env file");
        }

        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::layered(file, Self::environment())
    }

    /// Parses settings from TOML text layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` on malformed input or failed
    /// validation.
    pub fn from_toml_str(toml: &str) -> ApplicationResult<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Environment source: `SHIPQUOTE_LOG__LEVEL` maps to `log.level`.
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn layered<F>(file: F, env: Environment) -> ApplicationResult<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        let builder = Self::defaults()?.add_source(file).add_source(env);
        Self::finish(builder)
    }

    fn defaults() -> ApplicationResult<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();
        Config::builder()
            .set_default("tracking_prefix", defaults.tracking_prefix)
            .and_then(|b| b.set_default("currency", defaults.currency))
            .and_then(|b| b.set_default("log.level", defaults.log.level))
            .and_then(|b| b.set_default("log.format", defaults.log.format.to_string()))
            .map_err(config_error)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ApplicationResult<Self> {
        let settings: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if:
    /// - `tracking_prefix` is not two uppercase ASCII letters
    /// - `currency` is not three uppercase ASCII letters
    /// - `log.level` is empty
    pub fn validate(&self) -> ApplicationResult<()> {
        self.tracking_prefix()?;

        if self.currency.len() != 3 || !self.currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ApplicationError::configuration(format!(
                "currency must be a three-letter code, got '{}'",
                self.currency
            )));
        }

        if self.log.level.trim().is_empty() {
            return Err(ApplicationError::configuration("log.level must not be empty"));
        }

        Ok(())
    }

    /// Returns the validated tracking prefix.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the prefix is malformed.
    pub fn tracking_prefix(&self) -> ApplicationResult<TrackingPrefix> {
        TrackingPrefix::new(self.tracking_prefix.as_str())
            .map_err(|e| ApplicationError::configuration(e.to_string()))
    }
}

fn config_error(err: config::ConfigError) -> ApplicationError {
    ApplicationError::configuration(err.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.tracking_prefix().unwrap().as_str(), "LC");
        assert_eq!(cfg.log.format, LogFormat::Text);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn toml_overrides_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            tracking_prefix = "SQ"

            [log]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tracking_prefix, "SQ");
        assert_eq!(cfg.currency, "USD");
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(cfg.log.format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_prefix() {
        let err = AppConfig::from_toml_str(r#"tracking_prefix = "lc1""#).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn rejects_bad_currency() {
        assert!(AppConfig::from_toml_str(r#"currency = "dollars""#).is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::from_toml_str("[log]\nformat = \"xml\"").unwrap_err();
        assert!(err.to_string().contains("configuration"));
    }

    fn env_vars(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    #[test]
    fn env_overrides_nested_file_value() {
        let file = File::from_str("[log]\nformat = \"text\"\nlevel = \"warn\"", FileFormat::Toml);
        let cfg = AppConfig::layered(file, env_vars(&[("SHIPQUOTE_LOG__FORMAT", "json")])).unwrap();
        assert_eq!(cfg.log.format, LogFormat::Json);
        assert_eq!(cfg.log.level, "warn");
    }

    #[test]
    fn env_overrides_top_level_value() {
        let file = File::from_str(r#"tracking_prefix = "SQ""#, FileFormat::Toml);
        let cfg = AppConfig::layered(
            file,
            env_vars(&[("SHIPQUOTE_TRACKING_PREFIX", "ZX"), ("OTHER_CURRENCY", "EUR")]),
        )
        .unwrap();
        assert_eq!(cfg.tracking_prefix, "ZX");
        assert_eq!(cfg.currency, "USD");
    }

    #[test]
    fn env_value_is_validated() {
        let file = File::from_str("", FileFormat::Toml);
        let err = AppConfig::layered(file, env_vars(&[("SHIPQUOTE_CURRENCY", "euro")])).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let missing = Path::new("/nonexistent/shipquote-missing.toml");
        assert!(AppConfig::load(Some(missing)).is_err());
    }

    #[test]
    fn log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
