//! Helper functions for creating specific error types

use super::pipeline::{FetchError, StoreError};
use super::types::IngestError;

impl IngestError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl FetchError {
    /// Classify a reqwest send/read failure
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Whether the remote API answered (as opposed to a transport failure)
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl StoreError {
    /// Classify a reqwest send/read failure
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Whether the write collided with an existing document
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
