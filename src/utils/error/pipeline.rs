//! Per-notification error types
//!
//! Only [`DecodeError`] ever reaches the webhook caller. Everything else is
//! reduced by the dispatcher to a log entry and a skipped notification.

use thiserror::Error;

/// The inbound batch could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Request body was empty
    #[error("request body is empty")]
    Empty,

    /// Request body is not a valid notification batch
    #[error("malformed notification batch: {0}")]
    Malformed(String),

    /// The notification list is absent or null
    #[error("notification list is missing")]
    MissingNotifications,
}

/// Fetching the referenced resource failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection or protocol failure before a response arrived
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request exceeded the client timeout
    #[error("request timed out")]
    Timeout,

    /// The remote API answered with a non-success status
    #[error("remote API returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Writing a record to the document store failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A document with the same id already exists in the partition
    #[error("document {id} already exists")]
    Conflict { id: String },

    /// The store answered with an unexpected status
    #[error("store returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection or protocol failure
    #[error("store transport failure: {0}")]
    Transport(String),

    /// The write exceeded the client timeout
    #[error("store request timed out")]
    Timeout,

    /// Request signing failed
    #[error("store authorization failed: {0}")]
    Auth(String),

    /// The record could not be serialized
    #[error("store serialization failure: {0}")]
    Serialization(String),
}

/// Failure of a single notification's fetch/transform/store pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Notification or fetched payload is missing an expected field
    #[error("semantic decode failed: {reason}")]
    SemanticDecode { reason: String },

    #[error("store write failed: {0}")]
    Store(#[from] StoreError),

    #[error("clientState mismatch for subscription {subscription_id}")]
    ClientStateMismatch { subscription_id: String },

    #[error("processing exceeded {secs}s")]
    Timeout { secs: u64 },
}

impl ProcessingError {
    pub fn semantic<S: Into<String>>(reason: S) -> Self {
        Self::SemanticDecode {
            reason: reason.into(),
        }
    }

    /// Short machine-readable kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(FetchError::Status { .. }) => "fetch_status",
            Self::Fetch(_) => "fetch_transport",
            Self::SemanticDecode { .. } => "semantic_decode",
            Self::Store(StoreError::Conflict { .. }) => "store_conflict",
            Self::Store(_) => "store",
            Self::ClientStateMismatch { .. } => "client_state",
            Self::Timeout { .. } => "timeout",
        }
    }
}
