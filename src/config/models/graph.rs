//! Remote resource API configuration

use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Base URL resource paths are appended to
    #[serde(default = "default_graph_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: default_graph_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !crate::utils::is_valid_url(&self.base_url) {
            return Err(format!("Invalid base URL: {}", self.base_url));
        }
        if self.timeout_secs == 0 {
            return Err("Timeout cannot be 0".to_string());
        }
        Ok(())
    }
}
