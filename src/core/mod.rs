//! Core business logic module
//!
//! This module contains the balance and settlement components:
//! - `aggregator` - Expense history → per-user balances
//! - `planner` - Balances → greedy settlement plan
//! - `engine` - Both stages combined into a group report
//! - `ledger` - Per-group partitioning of a mixed expense stream, with
//!   groups rejected by unreadable rows
//! - `async` - Thread-safe ledger and parallel report building

pub mod aggregator;
pub mod r#async;
pub mod engine;
pub mod ledger;
pub mod planner;

pub use aggregator::{aggregate, BalanceAggregator};
pub use engine::{GroupOutcome, SettlementEngine};
pub use ledger::{GroupEntry, GroupLedger};
pub use planner::{plan, SettlementPlanner};
pub use r#async::{AsyncGroupLedger, BatchProcessor};
