//! Expense-related types for the settlement engine
//!
//! An expense is one payment advanced by a single user on behalf of a set of
//! participants who split it equally.

use rust_decimal::Decimal;

/// User identifier
pub type UserId = u32;

/// Group identifier
pub type GroupId = u32;

/// Expense identifier, only used to point at the offending record in errors
pub type ExpenseId = u32;

/// A single expense of one group
///
/// Read-only input to the engine. The caller is responsible for handing over
/// the expenses of exactly one group.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Expense identifier
    pub expense: ExpenseId,

    /// Total cost, must be strictly positive
    pub amount: Decimal,

    /// The user who advanced the money
    pub payer: UserId,

    /// Users sharing the cost
    ///
    /// Must be non-empty and free of duplicates. The payer only carries a share
    /// when listed here.
    pub participants: Vec<UserId>,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        expense: ExpenseId,
        amount: Decimal,
        payer: UserId,
        participants: impl Into<Vec<UserId>>,
    ) -> Self {
        ExpenseRecord {
            expense,
            amount,
            payer,
            participants: participants.into(),
        }
    }
}

/// An expense tagged with the group it belongs to
///
/// This is what an export of many groups looks like; the ledgers split a stream
/// of these into per-group expense lists.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpense {
    pub group: GroupId,
    pub record: ExpenseRecord,
}
