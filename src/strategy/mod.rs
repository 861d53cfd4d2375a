//! Processing strategy module for expense processing
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! from reading the expense CSV to writing the JSON reports. Different
//! implementations (synchronous, asynchronous batch) can be selected at runtime
//! and produce identical output for the same input.

use crate::cli::StrategyType;
use crate::core::GroupOutcome;
use crate::io::Roster;
use crate::types::GroupReport;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete expense processing pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Process expenses from input file and write group reports to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing expense records
    /// * `roster` - Display names added to the reports
    /// * `output` - Mutable reference to a writer for the JSON reports
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - Output cannot be written
    ///
    /// Malformed rows and rejected groups are logged but do not cause this
    /// method to return an error.
    fn process(
        &self,
        input_path: &Path,
        roster: &Roster,
        output: &mut dyn Write,
    ) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

/// Keep the reports of accepted groups, logging every rejected one
pub(crate) fn collect_reports(outcomes: Vec<GroupOutcome>) -> Vec<GroupReport> {
    let mut reports = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        match outcome.result {
            Ok(report) => reports.push(report),
            Err(e) => tracing::error!(group = outcome.group, "Group rejected: {}", e),
        }
    }

    reports
}
