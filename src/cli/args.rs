use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute per-user balances and a settlement plan for shared expenses
#[derive(Parser, Debug)]
#[command(name = "settle")]
#[command(
    about = "Compute per-user balances and a minimal settlement plan for group expenses",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV file path containing expense records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Optional roster CSV mapping user IDs to display names
    #[arg(
        long = "users",
        value_name = "ROSTER",
        help = "Path to a CSV file with 'id,name' rows used to label users"
    )]
    pub users_file: Option<PathBuf>,

    /// Processing strategy to use for building reports
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        env = "SETTLE_STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of expense rows per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of expense rows per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads building group reports (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Diagnostic verbosity, overridden by RUST_LOG when set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "SETTLE_LOG_LEVEL",
        default_value = "warn",
        help = "Log level for diagnostics written to stderr"
    )]
    pub log_level: LogLevel,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Diagnostic log levels
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults. Zero values are rejected by
    /// `BatchConfig::new`, which logs a warning and uses the default instead.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_none() && self.max_concurrent_batches.is_none() {
            return BatchConfig::default();
        }

        let default = BatchConfig::default();
        BatchConfig::new(
            self.batch_size.unwrap_or(default.batch_size),
            self.max_concurrent_batches
                .unwrap_or(default.max_concurrent_batches),
        )
    }
}
