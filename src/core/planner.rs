//! Settlement planning
//!
//! This module provides the `SettlementPlanner`, which turns per-user balances
//! into a list of debtor → creditor payments that brings every balance back to
//! zero.
//!
//! # Algorithm
//!
//! Greedy largest-first matching:
//! 1. Split users into creditors (`balance > tolerance`) and debtors
//!    (`balance < -tolerance`); everyone else is already settled
//! 2. Sort both sides by amount, largest first, keeping input order on ties
//! 3. Repeatedly pay `min(creditor, debtor)` from the current debtor to the
//!    current creditor and move past whichever side is exhausted
//!
//! This produces at most `creditors + debtors - 1` payments. It is not a
//! minimum-count solver: for some distributions fewer payments exist.

use crate::types::{
    round_millimes, SettlementTransaction, UserBalance, UserId, SETTLEMENT_TOLERANCE,
};
use rust_decimal::Decimal;

/// Remaining amount one user still has to pay or receive
#[derive(Debug, Clone, Copy)]
struct Position {
    user: UserId,
    remaining: Decimal,
}

/// Greedy settlement planner
#[derive(Debug, Clone, Copy)]
pub struct SettlementPlanner {
    /// Amounts at or below this are treated as settled
    tolerance: Decimal,
}

impl Default for SettlementPlanner {
    fn default() -> Self {
        Self {
            tolerance: SETTLEMENT_TOLERANCE,
        }
    }
}

impl SettlementPlanner {
    /// Create a planner using the currency tolerance of one millime
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner with a custom settlement tolerance
    pub fn with_tolerance(tolerance: Decimal) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// Plan the payments that settle the given balances
    ///
    /// Never fails. Balances that are all settled, or only on one side, yield an
    /// empty plan. Output is deterministic for a given input order.
    pub fn plan(&self, balances: &[UserBalance]) -> Vec<SettlementTransaction> {
        let tolerance = self.tolerance;

        let mut creditors: Vec<Position> = balances
            .iter()
            .filter(|b| b.balance > tolerance)
            .map(|b| Position {
                user: b.user,
                remaining: b.balance,
            })
            .collect();

        let mut debtors: Vec<Position> = balances
            .iter()
            .filter(|b| b.balance < -tolerance)
            .map(|b| Position {
                user: b.user,
                remaining: b.balance.abs(),
            })
            .collect();

        // sort_by is stable, ties keep their input order
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

        let mut transactions = Vec::new();
        let (mut c, mut d) = (0, 0);

        while c < creditors.len() && d < debtors.len() {
            let creditor = &mut creditors[c];
            let debtor = &mut debtors[d];
            let amount = creditor.remaining.min(debtor.remaining);

            if amount > tolerance {
                transactions.push(SettlementTransaction {
                    from: debtor.user,
                    to: creditor.user,
                    amount: round_millimes(amount),
                });
            }

            // Remainders stay unrounded so rounding does not build up across payments
            creditor.remaining -= amount;
            debtor.remaining -= amount;

            // An exhausted side always advances, even with a zero tolerance
            if creditor.remaining < tolerance || creditor.remaining.is_zero() {
                c += 1;
            }
            if debtor.remaining < tolerance || debtor.remaining.is_zero() {
                d += 1;
            }
        }

        tracing::debug!(
            creditors = creditors.len(),
            debtors = debtors.len(),
            transactions = transactions.len(),
            "planned settlement"
        );

        transactions
    }
}

/// Plan the settlement of the given balances with the default tolerance
pub fn plan(balances: &[UserBalance]) -> Vec<SettlementTransaction> {
    SettlementPlanner::default().plan(balances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn balances(entries: &[(UserId, &str)]) -> Vec<UserBalance> {
        entries
            .iter()
            .map(|&(user, balance)| UserBalance {
                user,
                paid: Decimal::ZERO,
                share: Decimal::ZERO,
                balance: dec(balance),
            })
            .collect()
    }

    fn tx(from: UserId, to: UserId, amount: &str) -> SettlementTransaction {
        SettlementTransaction {
            from,
            to,
            amount: dec(amount),
        }
    }

    #[rstest]
    #[case::one_creditor_two_debtors(
        &[(1, "20"), (2, "-10"), (3, "-10")],
        vec![tx(2, 1, "10"), tx(3, 1, "10")]
    )]
    #[case::largest_debtor_pays_first(
        &[(1, "40"), (2, "-5"), (3, "-35")],
        vec![tx(3, 1, "35"), tx(2, 1, "5")]
    )]
    #[case::exact_pairs_advance_both_sides(
        &[(1, "10"), (2, "5"), (3, "-10"), (4, "-5")],
        vec![tx(3, 1, "10"), tx(4, 2, "5")]
    )]
    #[case::debtor_split_across_creditors(
        &[(1, "6"), (2, "4"), (3, "-10")],
        vec![tx(3, 1, "6"), tx(3, 2, "4")]
    )]
    #[case::all_settled(
        &[(1, "0"), (2, "0.001"), (3, "-0.001")],
        vec![]
    )]
    #[case::empty(&[], vec![])]
    #[case::one_sided(&[(1, "5"), (2, "3")], vec![])]
    fn test_plan(
        #[case] entries: &[(UserId, &str)],
        #[case] expected: Vec<SettlementTransaction>,
    ) {
        assert_eq!(plan(&balances(entries)), expected);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let plan = plan(&balances(&[
            (7, "-10"),
            (1, "10"),
            (3, "-10"),
            (9, "10"),
        ]));
        assert_eq!(plan, vec![tx(7, 1, "10"), tx(3, 9, "10")]);
    }

    #[test]
    fn test_rounded_drift_is_absorbed() {
        // Balances of a 10.000 expense split three ways
        let plan = plan(&balances(&[(1, "6.667"), (2, "-3.333"), (3, "-3.333")]));
        assert_eq!(plan, vec![tx(2, 1, "3.333"), tx(3, 1, "3.333")]);
    }

    #[test]
    fn test_amounts_are_rounded_to_millimes() {
        let input = balances(&[(1, "4.41666666"), (2, "-4.41666666")]);
        assert_eq!(plan(&input), vec![tx(2, 1, "4.417")]);
    }

    #[test]
    fn test_transaction_bound() {
        let input = balances(&[
            (1, "13"),
            (2, "7.5"),
            (3, "2.5"),
            (4, "-9"),
            (5, "-8"),
            (6, "-6"),
        ]);
        let plan = plan(&input);
        assert!(plan.len() <= 5);
        assert!(plan.iter().all(|t| t.from != t.to && t.amount > Decimal::ZERO));
    }

    #[test]
    fn test_custom_tolerance_ignores_small_balances() {
        let planner = SettlementPlanner::with_tolerance(dec("0.01"));
        let plan = planner.plan(&balances(&[(1, "0.005"), (2, "-0.005"), (3, "2"), (4, "-2")]));
        assert_eq!(plan, vec![tx(4, 3, "2")]);
    }

    #[test]
    fn test_zero_tolerance_terminates() {
        let planner = SettlementPlanner::with_tolerance(Decimal::ZERO);
        let plan = planner.plan(&balances(&[(1, "5"), (2, "-3"), (3, "-2")]));
        assert_eq!(plan, vec![tx(2, 1, "3"), tx(3, 1, "2")]);
    }
}
