//! Expense Settlement CLI
//!
//! Reads shared expenses from a CSV file and prints, per group, every member's
//! balance and the transfers that settle the group.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- expenses.csv > reports.json
//! cargo run -- --users users.csv expenses.csv > reports.json
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 expenses.csv > reports.json
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success, including when some groups were rejected
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use expense_settlement_engine::cli;
use expense_settlement_engine::io::Roster;
use expense_settlement_engine::logging;
use expense_settlement_engine::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = logging::init(args.log_level) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let roster = match &args.users_file {
        Some(path) => match Roster::from_path(path) {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!("Error: failed to load roster: {}", e);
                process::exit(1);
            }
        },
        None => Roster::new(),
    };

    let strategy = {
        let config = if args.strategy == cli::StrategyType::Async {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &roster, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
