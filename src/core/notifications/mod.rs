//! Inbound change notifications
//!
//! This module holds the notification data model and the decoder that turns
//! a webhook request body into a [`NotificationBatch`].

mod decoder;
mod types;

pub use decoder::decode_batch;
pub use types::{Notification, NotificationBatch};
