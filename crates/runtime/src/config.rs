//! Logging configuration.

use numnorm_core::{NormError, NormResult};
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Logging configuration for the numnorm tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "text_normalizer=trace").
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Build configuration from the environment.
    ///
    /// Uses:
    /// - `RUST_LOG` for log level (default: "info")
    /// - `LOG_FORMAT` for format (default: "text")
    pub fn from_env() -> NormResult<Self> {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    /// Build configuration from optional level and format values.
    pub fn from_vars(level: Option<String>, format: Option<String>) -> NormResult<Self> {
        let mut config = Self::default();

        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            config.level = level;
        }
        if let Some(format) = format {
            config.format = format.parse().map_err(NormError::config)?;
        }

        Ok(config)
    }

    /// Override the level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Override the format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}
