//! In-memory identity-keyed repository.

use super::traits::Record;
use crate::domain::text::contains_ignore_case;
use crate::domain::RecordId;
use crate::error::{RecordError, RecordResult};
use std::collections::HashMap;

/// Identity-keyed store that exclusively owns its records.
///
/// Keys are unique and iteration order is unspecified. The store is not
/// synchronized; wrap the owning service in a lock for shared access.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R: Record> {
    records: HashMap<RecordId, R>,
}

impl<R: Record> InMemoryRepository<R> {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Take ownership of `record`, failing if its ID is already stored.
    ///
    /// On failure the stored record is left untouched.
    pub fn insert(&mut self, record: R) -> RecordResult<()> {
        if self.records.contains_key(record.id()) {
            return Err(RecordError::DuplicateIdentifier {
                kind: R::KIND,
                id: record.id().to_string(),
            });
        }
        self.records.insert(record.id().clone(), record);
        Ok(())
    }

    /// Remove and return the record stored under `id`.
    pub fn remove(&mut self, id: &str) -> RecordResult<R> {
        self.records.remove(id).ok_or_else(|| Self::not_found(id))
    }

    /// Get a record by ID, or `None` when absent.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    /// Get a mutable record by ID, failing with `NotFound` when absent.
    pub fn get_mut(&mut self, id: &str) -> RecordResult<&mut R> {
        self.records.get_mut(id).ok_or_else(|| Self::not_found(id))
    }

    /// Every record with a searchable field containing `query`, ignoring case.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&R> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record
                    .searchable_fields()
                    .into_iter()
                    .any(|field| contains_ignore_case(field, &needle))
            })
            .collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn not_found(id: &str) -> RecordError {
        RecordError::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        }
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}
