//! Batch dispatching
//!
//! Decode once, then run fetch → transform → store for every notification
//! independently. A failing notification is recorded and skipped; it never
//! aborts its siblings and never changes the response to the sender.

mod outcome;

pub use outcome::{BatchReport, ItemOutcome};

use crate::config::PipelineConfig;
use crate::core::events::{EventSink, PipelineEvent};
use crate::core::fetcher::ResourceFetcher;
use crate::core::notifications::{Notification, NotificationBatch, decode_batch};
use crate::core::transform::{RecordTransformer, StorageRecord};
use crate::storage::StoreWriter;
use crate::utils::error::{DecodeError, ProcessingError};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;

/// Orchestrates the per-notification pipeline for a whole batch
#[derive(Clone)]
pub struct BatchDispatcher {
    fetcher: Arc<dyn ResourceFetcher>,
    transformer: RecordTransformer,
    writer: StoreWriter,
    events: Arc<dyn EventSink>,
    expected_client_state: Option<String>,
    max_concurrency: usize,
    item_timeout: Duration,
}

impl BatchDispatcher {
    pub fn new(
        config: &PipelineConfig,
        fetcher: Arc<dyn ResourceFetcher>,
        writer: StoreWriter,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            fetcher,
            transformer: RecordTransformer::new(config.id_strategy),
            writer,
            events,
            expected_client_state: config.expected_client_state.clone(),
            max_concurrency: config.max_concurrency.max(1),
            item_timeout: Duration::from_secs(config.item_timeout_secs),
        }
    }

    /// Decode a request body and dispatch the batch it carries
    pub async fn handle_payload(&self, payload: &[u8]) -> Result<BatchReport, DecodeError> {
        let batch = decode_batch(payload).inspect_err(|e| {
            self.events.record(PipelineEvent::BatchRejected {
                reason: e.to_string(),
            });
        })?;

        Ok(self.dispatch(batch).await)
    }

    /// Process every notification; outcomes are reported in arrival order
    pub async fn dispatch(&self, batch: NotificationBatch) -> BatchReport {
        let total = batch.len();
        self.events.record(PipelineEvent::BatchReceived { size: total });

        let outcomes: Vec<ItemOutcome> = stream::iter(batch)
            .map(|notification| self.process_item(notification))
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let report = BatchReport::new(outcomes);
        self.events.record(PipelineEvent::BatchCompleted {
            total,
            stored: report.stored(),
            failed: report.failed(),
        });
        report
    }

    async fn process_item(&self, notification: Notification) -> ItemOutcome {
        self.events.record(PipelineEvent::NotificationReceived {
            subscription_id: notification.subscription_id.clone(),
            resource: notification.resource.clone(),
            change_type: notification.change_type.clone(),
        });

        let result = match tokio::time::timeout(self.item_timeout, self.process(&notification)).await
        {
            Ok(result) => result,
            Err(_) => Err(ProcessingError::Timeout {
                secs: self.item_timeout.as_secs(),
            }),
        };

        match &result {
            Ok(record) => self.events.record(PipelineEvent::RecordStored {
                subscription_id: notification.subscription_id.clone(),
                record_id: record.id.to_string(),
                partition_key: record.partition_key().to_string(),
            }),
            Err(e) => self.events.record(PipelineEvent::ItemFailed {
                subscription_id: notification.subscription_id.clone(),
                resource: notification.resource.clone(),
                kind: e.kind().to_string(),
                error: e.to_string(),
            }),
        }

        ItemOutcome {
            notification,
            result,
        }
    }

    /// Fetch, transform and store a single notification
    pub async fn process(
        &self,
        notification: &Notification,
    ) -> Result<StorageRecord, ProcessingError> {
        if notification.subscription_id.trim().is_empty() {
            return Err(ProcessingError::semantic("notification has no subscriptionId"));
        }
        if notification.resource.trim().is_empty() {
            return Err(ProcessingError::semantic("notification has no resource"));
        }

        if let Some(expected) = &self.expected_client_state {
            if notification.client_state != *expected {
                return Err(ProcessingError::ClientStateMismatch {
                    subscription_id: notification.subscription_id.clone(),
                });
            }
        }

        let fetched = self
            .fetcher
            .fetch(&notification.subscription_id, &notification.resource)
            .await?;

        let record = self.transformer.transform(notification, fetched);
        self.writer.write(&record).await?;

        Ok(record)
    }
}
