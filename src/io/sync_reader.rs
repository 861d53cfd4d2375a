//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over expense records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use expense_settlement_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("expenses.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(expense) => println!("Group {}: {:?}", expense.group, expense.record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Rows whose group cannot be read are yielded as `ParseError`s
//! - Other unreadable rows are yielded as `MalformedExpense`s of their group
//!
//! Both carry the line number.

use crate::io::csv_format::{convert_csv_record, CsvExpenseRecord};
use crate::types::{GroupExpense, SettlementError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one row at a time; memory usage does not grow with the file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for an omitted participants column)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `IoError` if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, SettlementError> {
        let file = File::open(path).map_err(|e| SettlementError::open_failed(path, e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<GroupExpense, SettlementError>;

    /// Get the next expense from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(GroupExpense))` - Successfully parsed row
    /// * `Some(Err(SettlementError::ParseError))` - Row without a readable group
    /// * `Some(Err(SettlementError::MalformedExpense))` - Unreadable row of a group
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvExpenseRecord>();
        let row = deserializer.next()?;
        self.line_num += 1;

        Some(match row {
            Ok(csv_record) => convert_csv_record(csv_record, Some(self.line_num)),
            Err(e) => Err(SettlementError::parse_error(
                Some(self.line_num),
                e.to_string(),
            )),
        })
    }
}
