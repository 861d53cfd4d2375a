//! Asynchronous batch processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. Expenses are read in batches and partitioned per
//! group; once the input is exhausted every group's report is built in its own
//! task.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (group partitioning + parallel report building)
//!         └── AsyncGroupLedger (thread-safe per-group expenses)
//! ```

use crate::core::r#async::{AsyncGroupLedger, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::io::json_format::write_reports_json;
use crate::io::Roster;
use crate::strategy::{collect_reports, ProcessingStrategy};
use crate::types::SettlementError;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how many rows are read per batch and the number of worker threads
/// building reports.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Number of expense rows per batch
    pub batch_size: usize,
    /// Number of worker threads
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches,
                default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch processing configuration
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process expenses from input file and write group reports to output
    ///
    /// 1. Creates a tokio multi-threaded runtime
    /// 2. Reads expense rows in batches from CSV using AsyncReader
    /// 3. Ingests each batch into the shared ledger, in input order; a row
    ///    that names its group but cannot be read rejects that group
    /// 4. Builds every group's report concurrently
    /// 5. Writes the accepted reports as JSON
    fn process(
        &self,
        input_path: &Path,
        roster: &Roster,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        let outcomes = runtime.block_on(async {
            let ledger = Arc::new(AsyncGroupLedger::new());
            let processor = BatchProcessor::new(Arc::clone(&ledger));

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| SettlementError::open_failed(input_path, e).to_string())?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }
                processor.ingest_batch(batch);
            }

            tracing::debug!(groups = ledger.len(), "ingested expenses");
            Ok::<_, String>(processor.build_reports().await)
        })?;

        let reports = collect_reports(outcomes);
        write_reports_json(&reports, roster, output).map_err(|e| e.to_string())
    }
}
