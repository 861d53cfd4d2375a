//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reading over expense records for the async strategy.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of GroupExpense results
//!                  ↓
//!           csv_format module
//!           (CsvExpenseRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvExpenseRecord};
use crate::types::{GroupExpense, SettlementError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 1,
        }
    }

    /// Read a batch of expense rows
    ///
    /// Reads up to `batch_size` rows that belong to a group. Rows whose group
    /// cannot be read are logged and skipped.
    ///
    /// # Returns
    ///
    /// One entry per row, in input order: the converted expense, or the
    /// `MalformedExpense` that rejects the row's group. An empty vector means
    /// end of file.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Vec<Result<GroupExpense, SettlementError>> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvExpenseRecord>();

        while batch.len() < batch_size {
            let Some(row) = records.next().await else {
                break;
            };
            self.line_num += 1;

            match row {
                Ok(csv_record) => batch.push(convert_csv_record(csv_record, Some(self.line_num))),
                Err(e) => {
                    let error = SettlementError::parse_error(Some(self.line_num), e.to_string());
                    tracing::warn!("Skipping expense record: {}", error);
                }
            }
        }

        batch
    }
}
