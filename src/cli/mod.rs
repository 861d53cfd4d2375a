// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, LogLevel, StrategyType};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Values not given on the command line are read from `SETTLE_STRATEGY` and
/// `SETTLE_LOG_LEVEL` before falling back to defaults. On invalid arguments or
/// `--help`, clap prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
