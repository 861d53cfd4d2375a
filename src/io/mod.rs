//! I/O module
//!
//! Handles expense input and report output.
//!
//! # Components
//!
//! - `csv_format` - Expense CSV format handling (row conversion)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `roster` - Optional display names for users
//! - `json_format` - Group report serialization

pub mod async_reader;
pub mod csv_format;
pub mod json_format;
pub mod roster;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, parse_participants, CsvExpenseRecord};
pub use json_format::write_reports_json;
pub use roster::Roster;
pub use sync_reader::SyncReader;
