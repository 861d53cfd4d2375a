//! User roster
//!
//! Optional display names for user IDs, read from a CSV file with columns
//! `id,name`. Reports fall back to bare IDs for users missing from the roster.

use crate::types::{SettlementError, UserId};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: UserId,
    name: String,
}

/// Display names by user ID
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    names: HashMap<UserId, String>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a roster from a CSV file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a row is malformed.
    /// Unlike expense rows, roster rows are not skipped: a broken roster is
    /// reported as a whole.
    pub fn from_path(path: &Path) -> Result<Self, SettlementError> {
        let file = File::open(path).map_err(|e| SettlementError::open_failed(path, e))?;
        Self::from_reader(file)
    }

    /// Read a roster from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SettlementError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let mut roster = Self::new();
        for row in reader.deserialize::<RosterRow>() {
            let row = row?;
            roster.insert(row.id, row.name);
        }

        tracing::debug!(users = roster.len(), "loaded roster");
        Ok(roster)
    }

    /// Set the display name of a user, replacing any previous one
    pub fn insert(&mut self, user: UserId, name: impl Into<String>) {
        self.names.insert(user, name.into());
    }

    /// Display name of a user, if known
    pub fn name(&self, user: UserId) -> Option<&str> {
        self.names.get(&user).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(UserId, S)> for Roster {
    fn from_iter<I: IntoIterator<Item = (UserId, S)>>(iter: I) -> Self {
        let mut roster = Self::new();
        for (user, name) in iter {
            roster.insert(user, name);
        }
        roster
    }
}
