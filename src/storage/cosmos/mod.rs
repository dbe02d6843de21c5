//! Azure Cosmos DB document store over the REST API
//!
//! Documents are created with `POST dbs/{db}/colls/{coll}/docs`, signed with
//! the account master key. A 409 from the service is reported as
//! [`StoreError::Conflict`].

mod auth;
mod provision;

pub use auth::MasterKey;

use super::DocumentStore;
use crate::config::{CredentialsConfig, StoreConfig};
use crate::core::transform::StorageRecord;
use crate::utils::error::{IngestError, Result, StoreError};
use crate::utils::truncate_string;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// REST API version sent with every request
pub const API_VERSION: &str = "2018-12-31";

const HEADER_DATE: &str = "x-ms-date";
const HEADER_VERSION: &str = "x-ms-version";
const HEADER_PARTITION_KEY: &str = "x-ms-documentdb-partitionkey";
const HEADER_UPSERT: &str = "x-ms-documentdb-is-upsert";

/// Error body returned by the service
#[derive(Deserialize)]
struct CosmosErrorBody {
    message: Option<String>,
}

/// Cosmos DB container client
#[derive(Clone)]
pub struct CosmosStore {
    client: Client,
    endpoint: String,
    database: String,
    container: String,
    key: MasterKey,
}

impl CosmosStore {
    /// Create a client for the configured container
    pub fn new(config: &StoreConfig, credentials: &CredentialsConfig) -> Result<Self> {
        let key = MasterKey::from_base64(&credentials.auth_key)
            .map_err(|e| IngestError::config(format!("Invalid store key: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IngestError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: credentials.endpoint.trim_end_matches('/').to_string(),
            database: config.database.clone(),
            container: config.container.clone(),
            key,
        })
    }

    /// Resource link of the container, as used in request signatures
    pub fn collection_link(&self) -> String {
        format!("dbs/{}/colls/{}", self.database, self.container)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    /// POST a JSON body signed for `resource_type` on `resource_link`
    async fn post_signed<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        resource_type: &str,
        resource_link: &str,
        body: &T,
        partition_key: Option<&str>,
    ) -> std::result::Result<Response, StoreError> {
        let date = auth::rfc1123_now();
        let authorization = self
            .key
            .authorization("POST", resource_type, resource_link, &date)?;

        let mut request = self
            .client
            .post(self.url(path))
            .header(reqwest::header::AUTHORIZATION, authorization)
            .header(HEADER_DATE, date)
            .header(HEADER_VERSION, API_VERSION)
            .header(CONTENT_TYPE, "application/json");

        if let Some(partition_key) = partition_key {
            request = request
                .header(HEADER_PARTITION_KEY, partition_key_header(partition_key)?)
                .header(HEADER_UPSERT, "False");
        }

        let payload =
            serde_json::to_vec(body).map_err(|e| StoreError::Serialization(e.to_string()))?;

        request
            .body(payload)
            .send()
            .await
            .map_err(|e| StoreError::from_reqwest(&e))
    }
}

#[async_trait]
impl DocumentStore for CosmosStore {
    async fn insert(&self, record: &StorageRecord) -> std::result::Result<(), StoreError> {
        let link = self.collection_link();
        let response = self
            .post_signed(
                &format!("{}/docs", link),
                "docs",
                &link,
                record,
                Some(record.partition_key()),
            )
            .await?;

        let status = response.status();
        debug!(id = %record.id, status = status.as_u16(), "Cosmos create document");

        match status {
            s if s.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(StoreError::Conflict {
                id: record.id.to_string(),
            }),
            _ => Err(status_error(status, response).await),
        }
    }

    fn name(&self) -> &'static str {
        "cosmos"
    }
}

/// Build a [`StoreError::Status`] from an unexpected response
async fn status_error(status: StatusCode, response: Response) -> StoreError {
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<CosmosErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or(text);

    StoreError::Status {
        status: status.as_u16(),
        message: truncate_string(&message, 512),
    }
}

/// Partition key header value: a JSON array, non-ASCII escaped as `\uXXXX`
fn partition_key_header(value: &str) -> std::result::Result<String, StoreError> {
    let json =
        serde_json::to_string(&[value]).map_err(|e| StoreError::Serialization(e.to_string()))?;

    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    Ok(escaped)
}
