//! In-memory store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::{FrontMatterRecord, FrontMatterStore, StoreError};

/// [`FrontMatterStore`] backed by a sorted map.
///
/// Nothing is persisted. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<String, FrontMatterRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrontMatterStore for MemoryStore {
    fn put(&self, record: &FrontMatterRecord) -> Result<(), StoreError> {
        if record.resource_path.is_empty() {
            return Err(StoreError::InvalidKey(String::new()));
        }
        self.records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(record.resource_path.clone(), record.clone());
        Ok(())
    }

    fn get(&self, resource_path: &str) -> Option<FrontMatterRecord> {
        self.records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(resource_path)
            .cloned()
    }

    fn all(&self) -> Vec<FrontMatterRecord> {
        self.records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
