//! Configuration management for the ingestion service
//!
//! Configuration is read from YAML, then overlaid with the process
//! environment (`AccessToken`, `EndPointUrl`, `Key`, ...), then validated.

pub mod models;

pub use models::*;

use crate::utils::error::{IngestError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable holding the resource API bearer token
pub const ENV_ACCESS_TOKEN: &str = "AccessToken";
/// Environment variable holding the document store endpoint
pub const ENV_ENDPOINT_URL: &str = "EndPointUrl";
/// Environment variable holding the document store key
pub const ENV_STORE_KEY: &str = "Key";
pub const ENV_HOST: &str = "INGEST_HOST";
pub const ENV_PORT: &str = "INGEST_PORT";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub ingest: IngestConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| IngestError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let ingest: IngestConfig = serde_yaml::from_str(content)
            .map_err(|e| IngestError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration parsed successfully");
        Ok(Self { ingest })
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            self.ingest.credentials.bearer_token = token;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT_URL) {
            self.ingest.credentials.endpoint = endpoint;
        }
        if let Some(key) = lookup(ENV_STORE_KEY) {
            self.ingest.credentials.auth_key = key;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.ingest.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.ingest.server.port = port
                .parse()
                .map_err(|e| IngestError::Config(format!("Invalid port: {}", e)))?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.ingest.server
    }

    pub fn credentials(&self) -> &CredentialsConfig {
        &self.ingest.credentials
    }

    pub fn graph(&self) -> &GraphConfig {
        &self.ingest.graph
    }

    pub fn store(&self) -> &StoreConfig {
        &self.ingest.store
    }

    pub fn pipeline(&self) -> &PipelineConfig {
        &self.ingest.pipeline
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.ingest.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.ingest
            .server
            .validate()
            .map_err(|e| IngestError::Config(format!("Server config error: {}", e)))?;

        self.ingest
            .graph
            .validate()
            .map_err(|e| IngestError::Config(format!("Graph config error: {}", e)))?;

        self.ingest
            .store
            .validate(&self.ingest.credentials)
            .map_err(|e| IngestError::Config(format!("Store config error: {}", e)))?;

        self.ingest
            .pipeline
            .validate()
            .map_err(|e| IngestError::Config(format!("Pipeline config error: {}", e)))?;

        // Fetches fail per item without a token; the service itself can still run
        if !self.ingest.credentials.has_bearer_token() {
            warn!(
                "No bearer token configured (set {}); every resource fetch will be rejected",
                ENV_ACCESS_TOKEN
            );
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.ingest)
            .map_err(|e| IngestError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
