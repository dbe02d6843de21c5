//! Document store configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which document store backend records are written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Azure Cosmos DB over its REST API
    #[default]
    Cosmos,
    /// Process-local map, lost on restart
    Memory,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default = "default_partition_key_path")]
    pub partition_key_path: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Create the database and container at startup if missing
    #[serde(default)]
    pub provision: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database: default_database(),
            container: default_container(),
            partition_key_path: default_partition_key_path(),
            timeout_secs: default_timeout(),
            provision: false,
        }
    }
}

impl StoreConfig {
    /// Validate store configuration against the credentials it will use
    pub fn validate(&self, credentials: &CredentialsConfig) -> Result<(), String> {
        if self.database.is_empty() || self.container.is_empty() {
            return Err("Database and container names are required".to_string());
        }

        if !self.partition_key_path.starts_with('/') {
            return Err(format!(
                "Partition key path must start with '/': {}",
                self.partition_key_path
            ));
        }

        if self.timeout_secs == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.backend == StoreBackend::Cosmos {
            if !crate::utils::is_valid_url(&credentials.endpoint) {
                return Err(format!(
                    "Cosmos backend requires a valid endpoint, got '{}'",
                    credentials.endpoint
                ));
            }
            if credentials.auth_key.is_empty() {
                return Err("Cosmos backend requires an authorization key".to_string());
            }
        }

        Ok(())
    }
}
