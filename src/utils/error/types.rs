//! Error types for the ingestion service

use super::pipeline::{DecodeError, StoreError};
use thiserror::Error;

/// Result type alias for the ingestion service
pub type Result<T> = std::result::Result<T, IngestError>;

/// Main error type for the ingestion service
#[derive(Error, Debug)]
pub enum IngestError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inbound notification batch could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document store errors outside of per-item processing (provisioning)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
