//! Resource fetching
//!
//! Given a notification's resource path, retrieve the referenced message from
//! the remote API. Transport failures, non-success statuses and payloads
//! missing expected fields are reported as distinct errors; none is retried.

mod graph;

pub use graph::GraphFetcher;

use crate::utils::error::ProcessingError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The parts of a fetched message that end up in storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedResource {
    pub subject: String,
    pub body_content: String,
}

/// Retrieves the resource a notification points at
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch `resource` on behalf of `subscription_id`
    async fn fetch(
        &self,
        subscription_id: &str,
        resource: &str,
    ) -> Result<FetchedResource, ProcessingError>;
}
