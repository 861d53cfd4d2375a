//! Synchronous processing strategy
//!
//! This module provides a single-threaded implementation of the
//! ProcessingStrategy trait. It delegates:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Per-group partitioning to `GroupLedger`
//! - Report building to `SettlementEngine`
//! - JSON output to `json_format::write_reports_json`

use crate::core::{GroupLedger, GroupOutcome, SettlementEngine};
use crate::io::json_format::write_reports_json;
use crate::io::sync_reader::SyncReader;
use crate::io::Roster;
use crate::strategy::{collect_reports, ProcessingStrategy};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use expense_settlement_engine::io::Roster;
/// use expense_settlement_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("expenses.csv"), &Roster::new(), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process expenses from input file and write group reports to output
    ///
    /// 1. Streams expense rows from the CSV file, skipping rows without a
    ///    readable group
    /// 2. Partitions them per group, rejecting groups with an unreadable row
    /// 3. Builds each group's report in group ID order
    /// 4. Writes the accepted reports as JSON
    fn process(
        &self,
        input_path: &Path,
        roster: &Roster,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        let reader = SyncReader::new(input_path).map_err(|e| e.to_string())?;

        let mut ledger = GroupLedger::new();
        for row in reader {
            ledger.ingest(row);
        }

        let engine = SettlementEngine::new();
        let outcomes: Vec<GroupOutcome> = ledger
            .into_groups()
            .into_iter()
            .map(|(group, entry)| engine.outcome(group, entry))
            .collect();

        let reports = collect_reports(outcomes);
        write_reports_json(&reports, roster, output).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run(content: &str) -> Value {
        let file = create_temp_csv(content);
        let mut output = Vec::new();
        SyncProcessingStrategy
            .process(file.path(), &Roster::new(), &mut output)
            .expect("Processing failed");
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_sync_strategy_single_expense() {
        let value = run("group,expense,payer,amount,participants\n1,1,1,30.000,1;2;3\n");

        assert_eq!(value[0]["groupId"], 1);
        assert_eq!(value[0]["balances"].as_array().unwrap().len(), 3);
        assert_eq!(value[0]["settlementPlan"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_sync_strategy_multiple_groups() {
        let value = run("group,expense,payer,amount,participants\n\
                         2,1,5,10,5;6\n\
                         1,2,1,20,1;2\n\
                         2,3,6,4,5;6\n");

        let groups: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["groupId"].as_u64().unwrap())
            .collect();
        assert_eq!(groups, vec![1, 2]);
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let mut output = Vec::new();
        let result = SyncProcessingStrategy.process(
            Path::new("nonexistent.csv"),
            &Roster::new(),
            &mut output,
        );
        assert!(result.unwrap_err().contains("File not found"));
    }

    #[test]
    fn test_sync_strategy_continues_on_unreadable_group() {
        let value = run("group,expense,payer,amount,participants\n\
                         1,1,1,100,1;2\n\
                         two,2,3,40,3;4\n\
                         3,3,5,50,5;6\n");

        let groups: Vec<u64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["groupId"].as_u64().unwrap())
            .collect();
        assert_eq!(groups, vec![1, 3]);
    }

    #[test]
    fn test_sync_strategy_rejects_group_with_malformed_row() {
        let value = run("group,expense,payer,amount,participants\n\
                         1,1,1,30,1;2;3\n\
                         1,2,2,3O,1;2;3\n\
                         2,3,4,10,4;5\n");

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["groupId"], 2);
    }

    #[test]
    fn test_sync_strategy_omits_rejected_group() {
        let value = run("group,expense,payer,amount,participants\n\
                         1,1,1,100,\n\
                         2,2,3,40,3;4\n");

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["groupId"], 2);
    }

    #[test]
    fn test_sync_strategy_empty_input() {
        let value = run("group,expense,payer,amount,participants\n");
        assert_eq!(value, Value::Array(vec![]));
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
