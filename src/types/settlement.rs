//! Settlement plan types

use super::balance::UserBalance;
use super::expense::{GroupId, UserId};
use rust_decimal::Decimal;

/// One payment of the settlement plan
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementTransaction {
    /// The debtor paying
    pub from: UserId,

    /// The creditor being paid
    pub to: UserId,

    /// Amount to transfer, strictly positive and rounded to the currency scale
    pub amount: Decimal,
}

/// Balances and settlement plan of one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub group: GroupId,
    pub total_spent: Decimal,
    pub balances: Vec<UserBalance>,
    pub settlement_plan: Vec<SettlementTransaction>,
}
