//! Balance aggregation
//!
//! This module provides the `BalanceAggregator`, which folds a group's expense
//! history into per-user totals:
//! - `paid`: everything the user advanced
//! - `share`: the user's equal part of every expense they took part in
//! - `balance`: `paid - share`
//!
//! Accumulation is exact; rounding to the currency scale happens once, when the
//! balance sheet is produced.

use crate::types::{
    round_millimes, BalanceSheet, ExpenseRecord, SettlementError, UserBalance, UserId,
};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Running totals of one user
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Tally {
    paid: Decimal,
    share: Decimal,
}

/// Accumulates expenses of one group into per-user balances
///
/// Users are kept in the order they are first seen (payer before participants),
/// which is the tie-break order of the final balance sheet.
#[derive(Debug, Clone, Default)]
pub struct BalanceAggregator {
    tallies: IndexMap<UserId, Tally>,
    total_spent: Decimal,
}

impl BalanceAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one expense to the running totals
    ///
    /// The expense is validated and fully staged before anything is committed, so
    /// a rejected expense leaves the aggregator exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The participant list is empty
    /// - A participant is listed twice
    /// - A running total would overflow
    pub fn add_expense(&mut self, expense: &ExpenseRecord) -> Result<(), SettlementError> {
        let id = expense.expense;

        if expense.amount <= Decimal::ZERO {
            return Err(SettlementError::invalid_amount(id, expense.amount));
        }
        if expense.participants.is_empty() {
            return Err(SettlementError::empty_participants(id));
        }

        let mut seen = HashSet::with_capacity(expense.participants.len());
        for &user in &expense.participants {
            if !seen.insert(user) {
                return Err(SettlementError::duplicate_participant(id, user));
            }
        }

        let participant_count = Decimal::from(expense.participants.len());
        let share_per_person = expense
            .amount
            .checked_div(participant_count)
            .ok_or_else(|| SettlementError::arithmetic_overflow("share", id))?;

        let total_spent = self
            .total_spent
            .checked_add(expense.amount)
            .ok_or_else(|| SettlementError::arithmetic_overflow("total spent", id))?;

        let mut staged: IndexMap<UserId, Tally> =
            IndexMap::with_capacity(expense.participants.len() + 1);

        let payer = staged
            .entry(expense.payer)
            .or_insert_with(|| self.tally(expense.payer));
        payer.paid = payer
            .paid
            .checked_add(expense.amount)
            .ok_or_else(|| SettlementError::arithmetic_overflow("paid", id))?;

        for &user in &expense.participants {
            let tally = staged.entry(user).or_insert_with(|| self.tally(user));
            tally.share = tally
                .share
                .checked_add(share_per_person)
                .ok_or_else(|| SettlementError::arithmetic_overflow("share", id))?;
        }

        // Commit: existing users keep their position, new ones are appended
        for (user, tally) in staged {
            self.tallies.insert(user, tally);
        }
        self.total_spent = total_spent;

        Ok(())
    }

    /// Produce the rounded balance sheet, largest creditor first
    ///
    /// Users with equal balances keep their first-seen order.
    pub fn finish(self) -> BalanceSheet {
        let mut balances: Vec<UserBalance> = self
            .tallies
            .into_iter()
            .map(|(user, tally)| UserBalance {
                user,
                paid: round_millimes(tally.paid),
                share: round_millimes(tally.share),
                balance: round_millimes(tally.paid - tally.share),
            })
            .collect();

        balances.sort_by(|a, b| b.balance.cmp(&a.balance));

        BalanceSheet {
            balances,
            total_spent: round_millimes(self.total_spent),
        }
    }

    fn tally(&self, user: UserId) -> Tally {
        self.tallies.get(&user).copied().unwrap_or_default()
    }
}

/// Compute the balance sheet of one group's expenses
///
/// Either every expense is accepted and the full sheet is returned, or the first
/// invalid expense is reported and nothing else is.
pub fn aggregate(expenses: &[ExpenseRecord]) -> Result<BalanceSheet, SettlementError> {
    let mut aggregator = BalanceAggregator::new();
    for expense in expenses {
        aggregator.add_expense(expense)?;
    }
    Ok(aggregator.finish())
}
