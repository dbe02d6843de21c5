//! Notification type definitions

use serde::{Deserialize, Deserializer, Serialize};

/// A single change event reported by the subscription service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Subscription that produced the event
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subscription_id: String,
    /// Opaque resource path, relative to the resource API base URL; empty
    /// for lifecycle events
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource: String,
    /// `created`, `updated`, `deleted`, ... kept as an opaque string
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_type: String,
    /// Shared secret echoed back by the subscription service
    #[serde(default, deserialize_with = "null_as_empty")]
    pub client_state: String,
}

impl Notification {
    pub fn new(
        subscription_id: impl Into<String>,
        resource: impl Into<String>,
        change_type: impl Into<String>,
        client_state: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource: resource.into(),
            change_type: change_type.into(),
            client_state: client_state.into(),
        }
    }

    /// Stable key identifying this event across redeliveries
    pub fn delivery_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.subscription_id, self.resource, self.change_type
        )
    }
}

/// The notifications delivered in one webhook call, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationBatch {
    notifications: Vec<Notification>,
}

impl NotificationBatch {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.notifications.iter()
    }

    pub fn into_inner(self) -> Vec<Notification> {
        self.notifications
    }
}

impl IntoIterator for NotificationBatch {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.notifications.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationBatch {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.notifications.iter()
    }
}

impl From<Vec<Notification>> for NotificationBatch {
    fn from(notifications: Vec<Notification>) -> Self {
        Self::new(notifications)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
