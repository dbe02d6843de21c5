//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Service configuration as it appears in the YAML file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngestConfig {
    /// HTTP trigger settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Endpoint, store key and bearer token
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Remote resource API
    #[serde(default)]
    pub graph: GraphConfig,
    /// Document store
    #[serde(default)]
    pub store: StoreConfig,
    /// Batch processing
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
