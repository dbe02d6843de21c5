//! Core notification-processing pipeline
//!
//! decode → (fetch → transform → store) per notification → aggregate.

pub mod dispatcher;
pub mod events;
pub mod fetcher;
pub mod notifications;
pub mod transform;

pub use dispatcher::{BatchDispatcher, BatchReport, ItemOutcome};
pub use events::{EventSink, MemorySink, PipelineEvent, TracingSink};
pub use fetcher::{FetchedResource, GraphFetcher, ResourceFetcher};
pub use notifications::{Notification, NotificationBatch, decode_batch};
pub use transform::{RecordTransformer, StorageRecord};
