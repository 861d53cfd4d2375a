//! Expense Settlement Engine Library
//! # Overview
//!
//! This library computes, for a group of people sharing expenses, how much each
//! member paid, how much they owe, and a short list of transfers that settles
//! every debt. Expenses are read from CSV with either a sync or an async
//! strategy and reports are written as JSON.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (expenses, balances, transfers, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::aggregator`] - Per-user paid, share and net balance
//!   - [`core::planner`] - Greedy largest-first settlement plan
//!   - [`core::engine`] - Per-group report orchestration
//!   - [`core::ledger`] - Partitioning of expenses per group
//! - [`io`] - CSV input, roster loading and JSON output
//! - [`strategy`] - Complete processing pipelines
//! - [`logging`] - Diagnostic output setup
//!
//! # Money
//!
//! Amounts are fixed-point decimals. Every reported figure is rounded half away
//! from zero to 3 decimal places (millimes). Balances within 0.001 of zero are
//! treated as settled.
//!
//! # Example
//!
//! ```
//! use expense_settlement_engine::{aggregate, plan, ExpenseRecord};
//! use rust_decimal::Decimal;
//!
//! let expenses = vec![ExpenseRecord::new(1, Decimal::new(30, 0), 1, [1, 2, 3])];
//! let sheet = aggregate(&expenses).unwrap();
//! let transfers = plan(&sheet.balances);
//!
//! assert_eq!(sheet.total_spent, Decimal::new(30, 0));
//! assert_eq!(transfers.len(), 2);
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{aggregate, plan, BalanceAggregator, SettlementEngine, SettlementPlanner};
pub use io::{write_reports_json, Roster};
pub use types::{
    BalanceSheet, ExpenseId, ExpenseRecord, GroupExpense, GroupId, GroupReport, SettlementError,
    SettlementTransaction, UserBalance, UserId,
};
