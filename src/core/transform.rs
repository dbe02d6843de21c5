//! Record transformation
//!
//! Maps a fetched resource onto the shape persisted in the document store.

use crate::config::IdStrategy;
use crate::core::fetcher::FetchedResource;
use crate::core::notifications::Notification;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for identifiers derived from a notification's delivery key
const RECORD_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f0e_4f5c_8d0b_4f4e_9a55_31c7_2b1e_5d42);

/// A stored message, serialized as `{id, Subject, EmailBody}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRecord {
    pub id: Uuid,
    /// Also the partition key
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "EmailBody")]
    pub body: String,
}

impl StorageRecord {
    pub fn partition_key(&self) -> &str {
        &self.subject
    }
}

/// Pure mapping from fetched resource to storage record
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordTransformer {
    strategy: IdStrategy,
}

impl RecordTransformer {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Build the record; subject and content are copied verbatim
    pub fn transform(&self, notification: &Notification, fetched: FetchedResource) -> StorageRecord {
        StorageRecord {
            id: self.record_id(notification),
            subject: fetched.subject,
            body: fetched.body_content,
        }
    }

    fn record_id(&self, notification: &Notification) -> Uuid {
        match self.strategy {
            IdStrategy::Random => Uuid::new_v4(),
            IdStrategy::Deterministic => {
                Uuid::new_v5(&RECORD_ID_NAMESPACE, notification.delivery_key().as_bytes())
            }
        }
    }
}
