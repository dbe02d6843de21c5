//! Microsoft Graph resource fetcher

use super::{FetchedResource, ResourceFetcher};
use crate::config::{CredentialsConfig, GraphConfig};
use crate::utils::error::{FetchError, IngestError, ProcessingError, Result};
use crate::utils::truncate_string;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Longest error body kept in a [`FetchError::Status`]
const MAX_ERROR_BODY: usize = 512;

#[derive(Deserialize)]
struct GraphMessage {
    subject: Option<String>,
    body: Option<GraphItemBody>,
}

#[derive(Deserialize)]
struct GraphItemBody {
    content: Option<String>,
}

/// Fetches messages with a single authenticated GET per notification
#[derive(Clone)]
pub struct GraphFetcher {
    client: Client,
    base_url: String,
    bearer_token: String,
}

impl GraphFetcher {
    /// Create a fetcher sharing one connection pool across requests
    pub fn new(config: &GraphConfig, credentials: &CredentialsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IngestError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: credentials.bearer_token.clone(),
        })
    }

    /// Full URL of a resource path
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    fn parse_message(body: &str) -> std::result::Result<FetchedResource, ProcessingError> {
        let message: GraphMessage = serde_json::from_str(body)
            .map_err(|e| ProcessingError::semantic(format!("response is not a message: {}", e)))?;

        let subject = message
            .subject
            .ok_or_else(|| ProcessingError::semantic("missing field `subject`"))?;
        let body_content = message
            .body
            .and_then(|body| body.content)
            .ok_or_else(|| ProcessingError::semantic("missing field `body.content`"))?;

        Ok(FetchedResource {
            subject,
            body_content,
        })
    }
}

#[async_trait]
impl ResourceFetcher for GraphFetcher {
    async fn fetch(
        &self,
        subscription_id: &str,
        resource: &str,
    ) -> std::result::Result<FetchedResource, ProcessingError> {
        let url = self.resource_url(resource);
        debug!(%subscription_id, %url, "Fetching resource");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        debug!(%subscription_id, status = status.as_u16(), "Resource API responded");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_string(&body, MAX_ERROR_BODY),
            }
            .into());
        }

        Self::parse_message(&body)
    }
}
