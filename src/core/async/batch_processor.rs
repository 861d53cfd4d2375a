//! Batch processing with group-based partitioning for async report building
//!
//! This module provides the `BatchProcessor` struct, which ingests batches of
//! expenses into an `AsyncGroupLedger` and, once the input is exhausted, builds
//! every group's report concurrently.
//!
//! # Design
//!
//! Groups are independent inputs of a pure computation, so each group's report
//! is built in its own tokio task with nothing shared between tasks.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── Arc<AsyncGroupLedger>  (per-group expenses, fed batch by batch)
//!     └── SettlementEngine       (stateless report builder, copied into tasks)
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use super::AsyncGroupLedger;
use crate::core::engine::{GroupOutcome, SettlementEngine};
use crate::core::ledger::{route_row, GroupEntry};
use crate::types::{GroupExpense, GroupId, SettlementError};

/// Batch processor with group-based partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Shared ledger the batches are ingested into
    ledger: Arc<AsyncGroupLedger>,

    /// Report builder
    engine: SettlementEngine,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// # Arguments
    ///
    /// * `ledger` - Arc-wrapped AsyncGroupLedger receiving the batches
    pub fn new(ledger: Arc<AsyncGroupLedger>) -> Self {
        Self {
            ledger,
            engine: SettlementEngine::new(),
        }
    }

    /// Partition a batch of rows by group ID
    ///
    /// # Guarantees
    ///
    /// - Each expense appears in exactly one partition
    /// - Expenses of each group keep their original order
    /// - A row error naming a group rejects that group's partition
    pub fn partition_by_group(
        &self,
        batch: Vec<Result<GroupExpense, SettlementError>>,
    ) -> HashMap<GroupId, GroupEntry> {
        let mut group_batches: HashMap<GroupId, GroupEntry> = HashMap::new();

        for row in batch {
            route_row(&mut group_batches, row);
        }

        group_batches
    }

    /// Ingest one batch into the ledger
    ///
    /// Batches must be ingested in input order to keep each group's expenses
    /// ordered.
    pub fn ingest_batch(&self, batch: Vec<Result<GroupExpense, SettlementError>>) {
        for (group, entry) in self.partition_by_group(batch) {
            self.ledger.append(group, entry);
        }
    }

    /// Build the reports of every ingested group
    ///
    /// Drains the ledger and spawns one task per group. Outcomes are returned
    /// sorted by group ID, rejected groups included.
    pub async fn build_reports(&self) -> Vec<GroupOutcome> {
        let groups = self.ledger.drain_groups();

        let mut tasks = Vec::with_capacity(groups.len());
        for (group, entry) in groups {
            let engine = self.engine;
            let task = tokio::spawn(async move { engine.outcome(group, entry) });
            tasks.push(task);
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::error!("Report task panicked: {:?}", e);
                }
            }
        }

        outcomes.sort_by_key(|outcome| outcome.group);
        outcomes
    }
}
