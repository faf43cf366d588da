//! numnorm command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use runtime::{LogFormat, LoggingConfig};
use tracing::info;

mod commands;

/// Spell out numbers in Russian text
#[derive(Debug, Parser)]
#[command(name = "numnorm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides RUST_LOG-derived config)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (json or text)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Text => LogFormat::Text,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize numbers in text
    Normalize {
        /// Input text, @file.txt to read a file, or - for stdin
        input: String,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show the text after every pipeline stage
    Trace {
        /// Input text, @file.txt to read a file, or - for stdin
        input: String,
    },

    /// Show version and pipeline info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().context("invalid logging configuration")?;
    if let Some(level) = cli.log_level {
        logging = logging.with_level(level);
    }
    if let Some(format) = cli.log_format {
        logging = logging.with_format(format.into());
    }
    runtime::logging::init_from_config(&logging);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting numnorm CLI");

    match cli.command {
        Commands::Normalize { input, json } => {
            commands::normalize::run(&input, json).context("normalization failed")?;
        }
        Commands::Trace { input } => {
            commands::trace::run(&input).context("trace failed")?;
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
