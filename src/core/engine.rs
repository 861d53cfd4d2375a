//! Settlement engine
//!
//! This module provides the `SettlementEngine` that turns one group's expenses
//! into a `GroupReport` by running the two stages in order:
//! - `aggregator` - expenses → per-user balances and total spent
//! - `planner` - balances → settlement transactions
//!
//! The engine holds no state between calls and can be shared freely across
//! threads.

use crate::core::aggregator::aggregate;
use crate::core::ledger::GroupEntry;
use crate::core::planner::SettlementPlanner;
use crate::types::{ExpenseRecord, GroupId, GroupReport, SettlementError};

/// Outcome of building the report of one group
///
/// A rejected group carries the error that stopped its aggregation.
#[derive(Debug, Clone)]
pub struct GroupOutcome {
    /// The group that was processed
    pub group: GroupId,

    /// The report, or why the group was rejected
    pub result: Result<GroupReport, SettlementError>,
}

/// Builds balance and settlement reports for groups
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementEngine {
    planner: SettlementPlanner,
}

impl SettlementEngine {
    /// Create an engine using the default settlement tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the report of one group
    ///
    /// # Errors
    ///
    /// Returns the first invalid expense of the group. No report is produced in
    /// that case.
    pub fn report(
        &self,
        group: GroupId,
        expenses: &[ExpenseRecord],
    ) -> Result<GroupReport, SettlementError> {
        let sheet = aggregate(expenses)?;
        let settlement_plan = self.planner.plan(&sheet.balances);

        tracing::debug!(
            group,
            expenses = expenses.len(),
            members = sheet.balances.len(),
            transactions = settlement_plan.len(),
            "built group report"
        );

        Ok(GroupReport {
            group,
            total_spent: sheet.total_spent,
            balances: sheet.balances,
            settlement_plan,
        })
    }

    /// Build the report of one ledger entry, keeping a rejection as an outcome
    ///
    /// A group already rejected while reading is not aggregated.
    pub fn outcome(&self, group: GroupId, entry: GroupEntry) -> GroupOutcome {
        let result = entry
            .into_result()
            .and_then(|expenses| self.report(group, &expenses));

        GroupOutcome { group, result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SettlementTransaction, UserBalance};
    use rust_decimal::Decimal;

    fn expense(id: u32, amount: i64, payer: u32, participants: &[u32]) -> ExpenseRecord {
        ExpenseRecord::new(id, Decimal::from(amount), payer, participants)
    }

    #[test]
    fn test_report_combines_balances_and_plan() {
        let engine = SettlementEngine::new();
        let report = engine
            .report(
                4,
                &[expense(1, 60, 1, &[1, 2, 3]), expense(2, 30, 2, &[2, 3])],
            )
            .unwrap();

        assert_eq!(report.group, 4);
        assert_eq!(report.total_spent, Decimal::from(90));
        assert_eq!(
            report.balances.first(),
            Some(&UserBalance {
                user: 1,
                paid: Decimal::from(60),
                share: Decimal::from(20),
                balance: Decimal::from(40),
            })
        );
        assert_eq!(
            report.settlement_plan,
            vec![
                SettlementTransaction {
                    from: 3,
                    to: 1,
                    amount: Decimal::from(35)
                },
                SettlementTransaction {
                    from: 2,
                    to: 1,
                    amount: Decimal::from(5)
                },
            ]
        );
    }

    #[test]
    fn test_empty_group_yields_empty_report() {
        let report = SettlementEngine::new().report(1, &[]).unwrap();
        assert!(report.balances.is_empty());
        assert!(report.settlement_plan.is_empty());
        assert_eq!(report.total_spent, Decimal::ZERO);
    }

    fn entry(expenses: Vec<ExpenseRecord>) -> GroupEntry {
        let mut entry = GroupEntry::default();
        for expense in expenses {
            entry.push(expense);
        }
        entry
    }

    #[test]
    fn test_outcome_keeps_rejection() {
        let outcome = SettlementEngine::new().outcome(9, entry(vec![expense(3, 10, 1, &[])]));
        assert_eq!(outcome.group, 9);
        assert_eq!(
            outcome.result,
            Err(SettlementError::EmptyParticipants { expense: 3 })
        );
    }

    #[test]
    fn test_outcome_of_rejected_entry_skips_aggregation() {
        let mut rejected = entry(vec![expense(1, 30, 1, &[1, 2, 3])]);
        rejected.reject(SettlementError::malformed_expense(9, Some(3), "Invalid amount '3O'"));

        let outcome = SettlementEngine::new().outcome(9, rejected);
        assert_eq!(
            outcome.result,
            Err(SettlementError::malformed_expense(9, Some(3), "Invalid amount '3O'"))
        );
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SettlementEngine>();
    }
}
