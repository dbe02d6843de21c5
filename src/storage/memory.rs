//! In-memory document store

use super::DocumentStore;
use crate::core::transform::StorageRecord;
use crate::utils::error::StoreError;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

/// Insert-only map keyed by (partition key, id)
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<(String, Uuid), StorageRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, partition_key: &str, id: &Uuid) -> Option<StorageRecord> {
        self.records
            .get(&(partition_key.to_string(), *id))
            .map(|entry| entry.value().clone())
    }

    /// All records stored under one partition key
    pub fn partition(&self, partition_key: &str) -> Vec<StorageRecord> {
        self.records
            .iter()
            .filter(|entry| entry.key().0 == partition_key)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn records(&self) -> Vec<StorageRecord> {
        self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, record: &StorageRecord) -> Result<(), StoreError> {
        match self
            .records
            .entry((record.partition_key().to_string(), record.id))
        {
            Entry::Occupied(_) => Err(StoreError::Conflict {
                id: record.id.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
