//! Balance types derived from a group's expense history

use super::expense::UserId;
use rust_decimal::Decimal;

/// Net position of one user within a group
///
/// A snapshot computed for a single query, never mutated afterwards.
/// All amounts are rounded to the currency scale.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBalance {
    /// The user this balance belongs to
    pub user: UserId,

    /// Sum of the amounts this user advanced
    pub paid: Decimal,

    /// Sum of this user's equal shares over every expense they took part in
    pub share: Decimal,

    /// `paid - share`
    ///
    /// Positive means the user is owed money (creditor), negative means the
    /// user owes money (debtor).
    pub balance: Decimal,
}

/// Output of the balance aggregation for one group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceSheet {
    /// Per-user balances, largest creditor first
    pub balances: Vec<UserBalance>,

    /// Sum of every amount paid in the group
    pub total_spent: Decimal,
}
