//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `expense`: Expense records and identifiers
//! - `balance`: Per-user balances derived from an expense history
//! - `settlement`: Settlement transactions and group reports
//! - `money`: Currency scale, tolerance and rounding
//! - `error`: Error types for the settlement engine

pub mod balance;
pub mod error;
pub mod expense;
pub mod money;
pub mod settlement;

pub use balance::{BalanceSheet, UserBalance};
pub use error::SettlementError;
pub use expense::{ExpenseId, ExpenseRecord, GroupExpense, GroupId, UserId};
pub use money::{round_millimes, CURRENCY_SCALE, SETTLEMENT_TOLERANCE};
pub use settlement::{GroupReport, SettlementTransaction};
