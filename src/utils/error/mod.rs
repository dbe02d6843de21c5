//! Error handling for the ingestion service
//!
//! This module defines the error taxonomy used throughout the crate: the
//! top-level [`IngestError`] and the per-notification errors that the batch
//! dispatcher absorbs.

#![allow(missing_docs)]

mod helpers;
mod pipeline;
mod response;
mod types;

pub use pipeline::{DecodeError, FetchError, ProcessingError, StoreError};
pub use response::{ErrorDetail, ErrorResponse};
pub use types::{IngestError, Result};
