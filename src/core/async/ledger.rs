//! Thread-safe group ledger for async batch processing
//!
//! This module provides the `AsyncGroupLedger` struct, which collects expenses
//! per group using `DashMap` so batches can be ingested from async tasks.
//!
//! # Ordering
//!
//! Appending a partition merges it into the group's entry in one locked
//! operation. Batches are ingested one after another, so every group's
//! expenses stay in input order across the whole file, and a rejected group
//! keeps the first error of the file.

use crate::core::ledger::GroupEntry;
use crate::types::GroupId;
use dashmap::DashMap;

/// Thread-safe store of group entries
#[derive(Debug, Default)]
pub struct AsyncGroupLedger {
    /// Concurrent map of group IDs to their entries
    groups: DashMap<GroupId, GroupEntry>,
}

impl AsyncGroupLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
        }
    }

    /// Append a partition to a group, creating the group on first use
    pub fn append(&self, group: GroupId, entry: GroupEntry) {
        self.groups.entry(group).or_default().merge(entry);
    }

    /// Number of groups seen
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no row has been appended
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Remove and return every group's entry, sorted by group ID
    pub fn drain_groups(&self) -> Vec<(GroupId, GroupEntry)> {
        let mut keys: Vec<GroupId> = self.groups.iter().map(|entry| *entry.key()).collect();
        keys.sort_unstable();

        keys.into_iter()
            .filter_map(|group| self.groups.remove(&group))
            .collect()
    }
}
