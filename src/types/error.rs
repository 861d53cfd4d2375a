//! Error types for the settlement engine
//!
//! This module defines all error types that can occur while reading expenses,
//! computing balances and writing reports.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parsing Errors**: Unreadable CSV rows (skipped), or rows of a known
//!   group with invalid numbers or identifiers (the group is rejected)
//! - **Expense Errors**: Empty or duplicated participants, non-positive amounts
//! - **Arithmetic Errors**: Decimal overflow while accumulating balances
//! - **Output Errors**: Report serialization failures

use super::expense::{ExpenseId, GroupId, UserId};
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Main error type for the settlement engine
///
/// Expense errors are raised by the balance aggregation before any output is
/// produced for the group, so a caller never observes partial balances.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A CSV row could not be parsed
    ///
    /// This is a recoverable error - the row is skipped and reading continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A row names its group but the rest of it cannot be read
    ///
    /// The group loses an expense it should have had, so the whole group is
    /// rejected rather than settled on partial data.
    #[error("Malformed expense for group {group}{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedExpense {
        /// Group the row belongs to
        group: GroupId,
        /// Line number of the row (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// An expense has no participants to split the cost between
    #[error("Expense {expense} has no participants")]
    EmptyParticipants {
        /// Expense identifier
        expense: ExpenseId,
    },

    /// An expense amount is zero or negative
    #[error("Invalid amount {amount} for expense {expense}: amounts must be positive")]
    InvalidAmount {
        /// Expense identifier
        expense: ExpenseId,
        /// The rejected amount
        amount: Decimal,
    },

    /// The same user appears twice in an expense's participants
    #[error("User {user} is listed more than once in expense {expense}")]
    DuplicateParticipant {
        /// Expense identifier
        expense: ExpenseId,
        /// The repeated user
        user: UserId,
    },

    /// Decimal overflow while accumulating an expense
    #[error("Arithmetic overflow in {operation} for expense {expense}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Expense identifier
        expense: ExpenseId,
    },

    /// A report could not be serialized
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error
        message: String,
    },
}

// Conversion from io::Error to SettlementError
impl From<std::io::Error> for SettlementError {
    fn from(error: std::io::Error) -> Self {
        SettlementError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SettlementError
impl From<csv::Error> for SettlementError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SettlementError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SettlementError {
    fn from(error: serde_json::Error) -> Self {
        SettlementError::Serialization {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SettlementError {
    /// Create the error for a file that could not be opened
    ///
    /// A missing file maps to `FileNotFound`, anything else to `IoError`.
    pub fn open_failed(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            SettlementError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            SettlementError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }

    /// Create a ParseError
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        SettlementError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a MalformedExpense error
    pub fn malformed_expense(
        group: GroupId,
        line: Option<u64>,
        message: impl Into<String>,
    ) -> Self {
        SettlementError::MalformedExpense {
            group,
            line,
            message: message.into(),
        }
    }

    /// The group this error rejects, for errors raised on a readable group ID
    pub fn rejected_group(&self) -> Option<GroupId> {
        match self {
            SettlementError::MalformedExpense { group, .. } => Some(*group),
            _ => None,
        }
    }

    /// Create an EmptyParticipants error
    pub fn empty_participants(expense: ExpenseId) -> Self {
        SettlementError::EmptyParticipants { expense }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(expense: ExpenseId, amount: Decimal) -> Self {
        SettlementError::InvalidAmount { expense, amount }
    }

    /// Create a DuplicateParticipant error
    pub fn duplicate_participant(expense: ExpenseId, user: UserId) -> Self {
        SettlementError::DuplicateParticipant { expense, user }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, expense: ExpenseId) -> Self {
        SettlementError::ArithmeticOverflow {
            operation: operation.to_string(),
            expense,
        }
    }
}
