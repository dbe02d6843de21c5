//! Database and container bootstrap
//!
//! Creates the database and the partitioned container when they are missing.
//! Only runs when `store.provision` is enabled.

use super::CosmosStore;
use crate::utils::error::StoreError;
use reqwest::StatusCode;
use serde_json::json;
use tracing::info;

impl CosmosStore {
    /// Create database and container if they do not exist yet
    pub async fn provision(&self, partition_key_path: &str) -> Result<(), StoreError> {
        let database_link = format!("dbs/{}", self.database);

        let response = self
            .post_signed("dbs", "dbs", "", &json!({ "id": self.database }), None)
            .await?;
        self.accept_created_or_existing(response).await?;
        info!("Database ready: {}", self.database);

        let container = json!({
            "id": self.container,
            "partitionKey": { "paths": [partition_key_path], "kind": "Hash" }
        });
        let response = self
            .post_signed(
                &format!("{}/colls", database_link),
                "colls",
                &database_link,
                &container,
                None,
            )
            .await?;
        self.accept_created_or_existing(response).await?;
        info!("Container ready: {}", self.container);

        Ok(())
    }

    async fn accept_created_or_existing(
        &self,
        response: reqwest::Response,
    ) -> Result<(), StoreError> {
        let status = response.status();
        if status.is_success() || status == StatusCode::CONFLICT {
            Ok(())
        } else {
            Err(super::status_error(status, response).await)
        }
    }
}
