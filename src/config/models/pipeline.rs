//! Batch processing configuration

use super::*;
use serde::{Deserialize, Serialize};

/// How storage record identifiers are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Fresh UUIDv4 per record; redelivery stores a duplicate
    #[default]
    Random,
    /// UUIDv5 over subscriptionId, resource and changeType; redelivery conflicts
    Deterministic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Notifications processed at once within one batch
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Reject notifications whose clientState differs from this value
    #[serde(default)]
    pub expected_client_state: Option<String>,
    /// Upper bound on one notification's fetch and store, in seconds
    #[serde(default = "default_item_timeout")]
    pub item_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            id_strategy: IdStrategy::default(),
            expected_client_state: None,
            item_timeout_secs: default_item_timeout(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrency == 0 {
            return Err("Max concurrency cannot be 0".to_string());
        }
        if self.item_timeout_secs == 0 {
            return Err("Item timeout cannot be 0".to_string());
        }
        Ok(())
    }
}
