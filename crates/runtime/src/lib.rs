//! # runtime
//!
//! Process setup shared by the numnorm tools:
//! - Structured logging (`tracing` + `tracing-subscriber`)
//! - Logging configuration from defaults and the environment

pub mod config;
pub mod logging;

pub use config::LoggingConfig;
pub use logging::{LogFormat, init_logging};
