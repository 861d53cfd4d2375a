//! CSV format handling for expense records
//!
//! This module centralizes the input format concerns, providing:
//! - CsvExpenseRecord structure for deserialization
//! - Conversion from CSV records to domain types
//!
//! Input columns: `group,expense,payer,amount,participants`, where
//! `participants` is a `;`-separated list of user IDs.
//!
//! Only the `group` column is typed at deserialization. A row whose group
//! cannot be read belongs to no group and is skipped by the readers. Any other
//! unreadable field is reported as a `MalformedExpense` of that row's group,
//! which rejects the group.
//!
//! Conversion only checks syntax. Whether an expense makes sense (positive
//! amount, at least one participant, no repeated participant) is decided by the
//! balance aggregation, which also rejects the whole group.

use crate::types::{ExpenseId, ExpenseRecord, GroupExpense, GroupId, SettlementError, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Separator between user IDs in the participants column
pub const PARTICIPANT_SEPARATOR: char = ';';

/// CSV record structure for deserialization
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvExpenseRecord {
    pub group: GroupId,
    pub expense: Option<String>,
    pub payer: Option<String>,
    pub amount: Option<String>,
    pub participants: Option<String>,
}

/// Parse a `;`-separated participant list
///
/// Blank entries are ignored, so an empty column yields an empty list.
pub fn parse_participants(list: &str, expense: ExpenseId) -> Result<Vec<UserId>, String> {
    list.split(PARTICIPANT_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            UserId::from_str(entry)
                .map_err(|_| format!("Invalid participant '{}' for expense {}", entry, expense))
        })
        .collect()
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, String> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("Missing {}", name)),
    }
}

fn convert_fields(csv_record: &CsvExpenseRecord) -> Result<ExpenseRecord, String> {
    let expense_str = required(&csv_record.expense, "expense ID")?;
    let expense = ExpenseId::from_str(expense_str)
        .map_err(|_| format!("Invalid expense ID '{}'", expense_str))?;

    let payer_str = required(&csv_record.payer, "payer")
        .map_err(|e| format!("{} for expense {}", e, expense))?;
    let payer = UserId::from_str(payer_str)
        .map_err(|_| format!("Invalid payer '{}' for expense {}", payer_str, expense))?;

    let amount_str = required(&csv_record.amount, "amount")
        .map_err(|_| format!("Expense {} requires an amount", expense))?;
    let amount = Decimal::from_str(amount_str)
        .map_err(|_| format!("Invalid amount '{}' for expense {}", amount_str, expense))?;

    let participants = match &csv_record.participants {
        Some(list) => parse_participants(list, expense)?,
        None => Vec::new(),
    };

    Ok(ExpenseRecord::new(expense, amount, payer, participants))
}

/// Convert a CsvExpenseRecord to a GroupExpense
///
/// # Returns
///
/// Result containing either:
/// - Ok(GroupExpense) - Successfully converted record
/// - Err(SettlementError::MalformedExpense) - The row's group, with `line` and
///   a message describing the conversion failure
pub fn convert_csv_record(
    csv_record: CsvExpenseRecord,
    line: Option<u64>,
) -> Result<GroupExpense, SettlementError> {
    let group = csv_record.group;

    convert_fields(&csv_record)
        .map(|record| GroupExpense { group, record })
        .map_err(|message| SettlementError::malformed_expense(group, line, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn csv_record(amount: &str, participants: Option<&str>) -> CsvExpenseRecord {
        CsvExpenseRecord {
            group: 1,
            expense: Some("7".to_string()),
            payer: Some("2".to_string()),
            amount: Some(amount.to_string()),
            participants: participants.map(|s| s.to_string()),
        }
    }

    fn error_message(result: Result<GroupExpense, SettlementError>) -> String {
        match result {
            Err(SettlementError::MalformedExpense { group, message, .. }) => {
                assert_eq!(group, 1);
                message
            }
            other => panic!("Expected malformed expense, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_valid_record() {
        let converted = convert_csv_record(csv_record("30.000", Some("1;2;3")), None).unwrap();

        assert_eq!(converted.group, 1);
        assert_eq!(converted.record.expense, 7);
        assert_eq!(converted.record.payer, 2);
        assert_eq!(converted.record.amount, Decimal::new(30000, 3));
        assert_eq!(converted.record.participants, vec![1, 2, 3]);
    }

    #[rstest]
    #[case::spaces_around_ids(" 1 ; 2 ;3 ", vec![1, 2, 3])]
    #[case::trailing_separator("4;5;", vec![4, 5])]
    #[case::single("9", vec![9])]
    #[case::blank("", vec![])]
    #[case::duplicates_kept("1;1", vec![1, 1])]
    fn test_parse_participants(#[case] list: &str, #[case] expected: Vec<UserId>) {
        assert_eq!(parse_participants(list, 1).unwrap(), expected);
    }

    #[test]
    fn test_missing_participants_column_is_empty_list() {
        let converted = convert_csv_record(csv_record("10", None), None).unwrap();
        assert!(converted.record.participants.is_empty());
    }

    #[rstest]
    #[case::invalid_amount("ten", Some("1;2"), "Invalid amount 'ten'")]
    #[case::letter_o_for_zero("3O", Some("1;2"), "Invalid amount '3O'")]
    #[case::empty_amount("", Some("1;2"), "requires an amount")]
    #[case::whitespace_amount("   ", Some("1;2"), "requires an amount")]
    #[case::invalid_participant("10", Some("1;bob"), "Invalid participant 'bob'")]
    #[case::negative_participant("10", Some("-1"), "Invalid participant")]
    fn test_convert_csv_record_errors_keep_group(
        #[case] amount: &str,
        #[case] participants: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let message = error_message(convert_csv_record(csv_record(amount, participants), None));
        assert!(message.contains(expected_error), "{}", message);
    }

    #[rstest]
    #[case::invalid_expense(Some("x"), Some("2"), "Invalid expense ID 'x'")]
    #[case::missing_expense(None, Some("2"), "Missing expense ID")]
    #[case::invalid_payer(Some("7"), Some("bob"), "Invalid payer 'bob' for expense 7")]
    #[case::missing_payer(Some("7"), None, "Missing payer for expense 7")]
    fn test_convert_csv_record_id_errors(
        #[case] expense: Option<&str>,
        #[case] payer: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let mut record = csv_record("10", Some("1;2"));
        record.expense = expense.map(str::to_string);
        record.payer = payer.map(str::to_string);

        let message = error_message(convert_csv_record(record, None));
        assert_eq!(message, expected_error);
    }

    #[test]
    fn test_convert_csv_record_error_carries_line() {
        let result = convert_csv_record(csv_record("oops", Some("1")), Some(4));
        assert_eq!(
            result,
            Err(SettlementError::MalformedExpense {
                group: 1,
                line: Some(4),
                message: "Invalid amount 'oops' for expense 7".to_string(),
            })
        );
    }

    #[rstest]
    #[case("  12.5  ", Decimal::new(125, 1))]
    #[case("0.001", Decimal::new(1, 3))]
    #[case("-4", Decimal::new(-4, 0))]
    fn test_convert_csv_record_amount_parsing(#[case] amount: &str, #[case] expected: Decimal) {
        let converted = convert_csv_record(csv_record(amount, Some("1")), None).unwrap();
        assert_eq!(converted.record.amount, expected);
    }
}
