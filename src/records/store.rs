//! In-memory record store.

use std::slice;

use tracing::debug;

use crate::error::{Error, Result};

use super::person::Person;

/// Ordered, append-only collection of records with unique ids.
///
/// Lookups are linear scans.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Person>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any stored record has this id.
    pub fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|p| p.id() == id)
    }

    /// Append a record. Fails with `DuplicateId` if the id is already taken.
    pub fn add(&mut self, person: Person) -> Result<()> {
        let id = person.id();
        if self.contains(id) {
            return Err(Error::DuplicateId { id });
        }
        debug!(id, kind = %person.kind(), "Record stored");
        self.records.push(person);
        Ok(())
    }

    /// Records in insertion order. Each call starts a fresh pass.
    pub fn all(&self) -> slice::Iter<'_, Person> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
