//! JSON report output
//!
//! Serializes group reports in the shape served to clients:
//!
//! ```text
//! [
//!   {
//!     "groupId": 1,
//!     "totalSpent": 30.0,
//!     "balances": [{ "userId": 1, "name": "Amira", "paid": 30.0, "share": 10.0, "balance": 20.0 }],
//!     "settlementPlan": [{ "from": 2, "fromName": "Bechir", "to": 1, "toName": "Amira", "amount": 10.0 }]
//!   }
//! ]
//! ```
//!
//! Amounts are written as JSON numbers. Names only appear for users present in
//! the roster.

use crate::io::roster::Roster;
use crate::types::{GroupId, GroupReport, SettlementError, UserId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupReportView<'a> {
    group_id: GroupId,
    #[serde(with = "rust_decimal::serde::float")]
    total_spent: Decimal,
    balances: Vec<BalanceView<'a>>,
    settlement_plan: Vec<TransferView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BalanceView<'a> {
    user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(with = "rust_decimal::serde::float")]
    paid: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    share: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    balance: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferView<'a> {
    from: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_name: Option<&'a str>,
    to: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_name: Option<&'a str>,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl<'a> GroupReportView<'a> {
    fn new(report: &GroupReport, roster: &'a Roster) -> Self {
        GroupReportView {
            group_id: report.group,
            total_spent: report.total_spent,
            balances: report
                .balances
                .iter()
                .map(|b| BalanceView {
                    user_id: b.user,
                    name: roster.name(b.user),
                    paid: b.paid,
                    share: b.share,
                    balance: b.balance,
                })
                .collect(),
            settlement_plan: report
                .settlement_plan
                .iter()
                .map(|t| TransferView {
                    from: t.from,
                    from_name: roster.name(t.from),
                    to: t.to,
                    to_name: roster.name(t.to),
                    amount: t.amount,
                })
                .collect(),
        }
    }
}

/// Write group reports as a pretty-printed JSON array
///
/// Reports are sorted by group ID for deterministic output. An empty slice
/// produces `[]`.
pub fn write_reports_json(
    reports: &[GroupReport],
    roster: &Roster,
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    let mut sorted: Vec<&GroupReport> = reports.iter().collect();
    sorted.sort_by_key(|report| report.group);

    let views: Vec<GroupReportView> = sorted
        .into_iter()
        .map(|report| GroupReportView::new(report, roster))
        .collect();

    serde_json::to_writer_pretty(&mut *output, &views)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SettlementTransaction, UserBalance};
    use serde_json::{json, Value};

    fn write(reports: &[GroupReport], roster: &Roster) -> Value {
        let mut output = Vec::new();
        write_reports_json(reports, roster, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    fn report(group: GroupId) -> GroupReport {
        GroupReport {
            group,
            total_spent: Decimal::new(10000, 3),
            balances: vec![
                UserBalance {
                    user: 1,
                    paid: Decimal::new(10000, 3),
                    share: Decimal::new(3333, 3),
                    balance: Decimal::new(6667, 3),
                },
                UserBalance {
                    user: 2,
                    paid: Decimal::ZERO,
                    share: Decimal::new(3333, 3),
                    balance: Decimal::new(-3333, 3),
                },
            ],
            settlement_plan: vec![SettlementTransaction {
                from: 2,
                to: 1,
                amount: Decimal::new(3333, 3),
            }],
        }
    }

    #[test]
    fn test_empty_reports() {
        let mut output = Vec::new();
        write_reports_json(&[], &Roster::new(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }

    #[test]
    fn test_report_shape_without_names() {
        let value = write(&[report(3)], &Roster::new());

        assert_eq!(
            value,
            json!([{
                "groupId": 3,
                "totalSpent": 10.0,
                "balances": [
                    { "userId": 1, "paid": 10.0, "share": 3.333, "balance": 6.667 },
                    { "userId": 2, "paid": 0.0, "share": 3.333, "balance": -3.333 }
                ],
                "settlementPlan": [
                    { "from": 2, "to": 1, "amount": 3.333 }
                ]
            }])
        );
    }

    #[test]
    fn test_names_from_roster() {
        let roster: Roster = [(1, "Amira")].into_iter().collect();
        let value = write(&[report(1)], &roster);

        assert_eq!(value[0]["balances"][0]["name"], json!("Amira"));
        assert!(value[0]["balances"][1].get("name").is_none());
        assert_eq!(value[0]["settlementPlan"][0]["toName"], json!("Amira"));
        assert!(value[0]["settlementPlan"][0].get("fromName").is_none());
    }

    #[test]
    fn test_reports_sorted_by_group() {
        let value = write(&[report(9), report(2), report(5)], &Roster::new());
        let groups: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["groupId"].as_u64().unwrap())
            .collect();
        assert_eq!(groups, vec![2, 5, 9]);
    }
}
