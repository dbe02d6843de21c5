//! Notification batch decoding
//!
//! The sender posts a JSON object `{"value": [...]}`. Any other top-level
//! shape is malformed; an absent or null list is rejected as well. An empty
//! list is a valid no-op batch.

use super::types::{Notification, NotificationBatch};
use crate::utils::error::DecodeError;
use serde_json::{Map, Value};

/// Keys the notification list is accepted under, in lookup order
const LIST_KEYS: [&str; 3] = ["value", "notifications", "Notifications"];

/// Decode a raw request body into a batch, all or nothing
pub fn decode_batch(payload: &[u8]) -> Result<NotificationBatch, DecodeError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }

    let mut document: Map<String, Value> =
        serde_json::from_slice(payload).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let list = LIST_KEYS
        .iter()
        .find_map(|key| document.remove(*key))
        .filter(|list| !list.is_null())
        .ok_or(DecodeError::MissingNotifications)?;

    let notifications: Vec<Notification> =
        serde_json::from_value(list).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    Ok(NotificationBatch::new(notifications))
}
