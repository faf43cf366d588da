//! Structured logging setup with tracing.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

use crate::config::LoggingConfig;

/// Logging format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format.
    #[default]
    #[serde(alias = "pretty")]
    Text,
    /// JSON format for structured logging.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown log format: {s}")),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so normalized text on stdout stays clean. `RUST_LOG`
/// takes precedence over `level` when set.
///
/// # Arguments
/// * `level` - Log level filter (e.g., "info", "debug", "trace")
/// * `format` - Output format (text or JSON)
///
/// # Example
/// ```ignore
/// use runtime::logging::{init_logging, LogFormat};
/// init_logging("debug", LogFormat::Text);
/// ```
pub fn init_logging(level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Text => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            );

            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            );

            let _ = tracing::subscriber::set_global_default(subscriber);
        }
    }
}

/// Initialize logging from a resolved configuration.
pub fn init_from_config(config: &LoggingConfig) {
    init_logging(&config.level, config.format);
}
