//! Subscriber installation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Minimum level logged when `RUST_LOG` is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON lines (for log aggregation).
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LogConfig {
    pub fn new(format: LogFormat, level: LogLevel) -> Self {
        Self { format, level }
    }

    /// Raise the level to `debug` unless it is already more verbose.
    pub fn verbose(mut self) -> Self {
        self.level = self.level.min(LogLevel::Debug);
        self
    }

    /// Filter from `RUST_LOG`, falling back to the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

/// Errors raised while installing the subscriber.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already set.
    #[error("Failed to install subscriber: {0}")]
    InitError(String),
}

/// Install the global subscriber. Logs go to stderr.
pub fn init(config: &LogConfig) -> Result<(), ObservabilityError> {
    let json_layer = (config.format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (config.format == LogFormat::Human).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.format, LogFormat::Human);
        assert_eq!(config.level, LogLevel::Info);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LogConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config, LogConfig::new(LogFormat::Json, LogLevel::Info));
    }

    #[test]
    fn test_verbose_only_lowers_threshold() {
        let config = LogConfig::new(LogFormat::Human, LogLevel::Warn).verbose();
        assert_eq!(config.level, LogLevel::Debug);

        let config = LogConfig::new(LogFormat::Human, LogLevel::Trace).verbose();
        assert_eq!(config.level, LogLevel::Trace);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }
}
