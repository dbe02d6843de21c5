//! Pipeline events
//!
//! The dispatcher reports what happens to a batch through an injected
//! [`EventSink`] instead of logging directly, so the same pipeline can write
//! to tracing in production and to memory in tests.

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Something observable that happened while processing a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// A request body was rejected before any item was processed
    BatchRejected { reason: String },
    BatchReceived { size: usize },
    NotificationReceived {
        subscription_id: String,
        resource: String,
        change_type: String,
    },
    RecordStored {
        subscription_id: String,
        record_id: String,
        partition_key: String,
    },
    /// One notification was skipped; siblings are unaffected
    ItemFailed {
        subscription_id: String,
        resource: String,
        kind: String,
        error: String,
    },
    BatchCompleted {
        total: usize,
        stored: usize,
        failed: usize,
    },
}

/// Receiver for pipeline events
pub trait EventSink: Send + Sync {
    fn record(&self, event: PipelineEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::BatchRejected { reason } => {
                warn!(%reason, "Notification batch rejected");
            }
            PipelineEvent::BatchReceived { size } => {
                info!(size, "Notification batch received");
            }
            PipelineEvent::NotificationReceived {
                subscription_id,
                resource,
                change_type,
            } => {
                info!(
                    %subscription_id,
                    %resource,
                    %change_type,
                    "Hook received for subscription"
                );
            }
            PipelineEvent::RecordStored {
                subscription_id,
                record_id,
                partition_key,
            } => {
                debug!(%subscription_id, %record_id, %partition_key, "Stored record");
            }
            PipelineEvent::ItemFailed {
                subscription_id,
                resource,
                kind,
                error,
            } => {
                error!(
                    %subscription_id,
                    %resource,
                    %kind,
                    %error,
                    "Error processing subscription notification; notification skipped"
                );
            }
            PipelineEvent::BatchCompleted {
                total,
                stored,
                failed,
            } => {
                info!(total, stored, failed, "Notification batch processed");
            }
        }
    }
}

/// Keeps every event in memory, in the order recorded
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<PipelineEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().clone()
    }

    /// Subscription ids of the notifications that failed
    pub fn failed_subscriptions(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                PipelineEvent::ItemFailed {
                    subscription_id, ..
                } => Some(subscription_id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn failure_count(&self) -> usize {
        self.failed_subscriptions().len()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: PipelineEvent) {
        self.events.lock().push(event);
    }
}
