//! Group ledger
//!
//! Splits a stream of expense rows covering many groups into one entry per
//! group, which is the unit the engine works on. A group with a row that could
//! not be read is kept as rejected, so it is never settled on partial data.

use crate::types::{ExpenseRecord, GroupExpense, GroupId, SettlementError};
use std::collections::HashMap;

/// Expenses of one group, or the first error that rejected it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupEntry {
    expenses: Vec<ExpenseRecord>,
    rejection: Option<SettlementError>,
}

impl GroupEntry {
    /// Append an expense; ignored once the group is rejected
    pub fn push(&mut self, record: ExpenseRecord) {
        if self.rejection.is_none() {
            self.expenses.push(record);
        }
    }

    /// Reject the group, keeping the first error
    pub fn reject(&mut self, error: SettlementError) {
        if self.rejection.is_none() {
            self.rejection = Some(error);
            self.expenses = Vec::new();
        }
    }

    /// Append a later part of the same group's input
    pub fn merge(&mut self, later: GroupEntry) {
        for record in later.expenses {
            self.push(record);
        }
        if let Some(error) = later.rejection {
            self.reject(error);
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// The expenses in input order, or the error that rejected the group
    pub fn into_result(self) -> Result<Vec<ExpenseRecord>, SettlementError> {
        match self.rejection {
            Some(error) => Err(error),
            None => Ok(self.expenses),
        }
    }
}

/// Route one row into a set of group entries
///
/// Errors that name a group reject it. Other errors mean the row belongs to no
/// group; they are logged and the row is skipped.
pub(crate) fn route_row(
    entries: &mut HashMap<GroupId, GroupEntry>,
    row: Result<GroupExpense, SettlementError>,
) {
    match row {
        Ok(expense) => entries
            .entry(expense.group)
            .or_default()
            .push(expense.record),
        Err(error) => match error.rejected_group() {
            Some(group) => entries.entry(group).or_default().reject(error),
            None => tracing::warn!("Skipping expense record: {}", error),
        },
    }
}

/// Entries of every group seen so far
///
/// Each group's expenses stay in the order they were recorded.
#[derive(Debug, Default)]
pub struct GroupLedger {
    groups: HashMap<GroupId, GroupEntry>,
}

impl GroupLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one expense under its group
    pub fn record(&mut self, expense: GroupExpense) {
        route_row(&mut self.groups, Ok(expense));
    }

    /// Reject a group; its report will carry `error` instead of balances
    pub fn reject(&mut self, group: GroupId, error: SettlementError) {
        self.groups.entry(group).or_default().reject(error);
    }

    /// Record one row as read from the input
    pub fn ingest(&mut self, row: Result<GroupExpense, SettlementError>) {
        route_row(&mut self.groups, row);
    }

    /// Number of groups seen
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no row has been recorded
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the ledger, returning every group's entry sorted by group ID
    pub fn into_groups(self) -> Vec<(GroupId, GroupEntry)> {
        let mut groups: Vec<_> = self.groups.into_iter().collect();
        groups.sort_by_key(|(group, _)| *group);
        groups
    }
}
