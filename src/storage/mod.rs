//! Storage layer for the ingestion service
//!
//! Records are written insert-only through a [`StoreWriter`] over any
//! [`DocumentStore`] backend, partitioned by subject.

/// Azure Cosmos DB backend
pub mod cosmos;
/// In-process backend
pub mod memory;

pub use cosmos::CosmosStore;
pub use memory::MemoryStore;

use crate::config::{Config, StoreBackend};
use crate::core::transform::StorageRecord;
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A document store that accepts insert-only writes
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `record` under its partition key; an existing id is a conflict
    async fn insert(&self, record: &StorageRecord) -> std::result::Result<(), StoreError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Writes storage records and reports, never raises, per-record failures
#[derive(Clone)]
pub struct StoreWriter {
    store: Arc<dyn DocumentStore>,
}

impl StoreWriter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist one record
    pub async fn write(&self, record: &StorageRecord) -> std::result::Result<(), StoreError> {
        match self.store.insert(record).await {
            Ok(()) => {
                debug!(
                    backend = self.store.name(),
                    id = %record.id,
                    "Created item in database"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    backend = self.store.name(),
                    id = %record.id,
                    conflict = e.is_conflict(),
                    error = %e,
                    "Failed to create item in database"
                );
                Err(e)
            }
        }
    }

    pub fn backend(&self) -> &'static str {
        self.store.name()
    }
}

/// Build the configured backend, provisioning it first when asked to
pub async fn connect(config: &Config) -> Result<Arc<dyn DocumentStore>> {
    let store = config.store();
    info!("Initializing document store: {:?}", store.backend);

    match store.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Cosmos => {
            let cosmos = CosmosStore::new(store, config.credentials())?;
            if store.provision {
                cosmos.provision(&store.partition_key_path).await?;
            }
            Ok(Arc::new(cosmos))
        }
    }
}
