//! Credentials for the store and the remote resource API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Secrets injected into the fetcher and the store writer
///
/// Usually populated from the `EndPointUrl`, `Key` and `AccessToken`
/// environment variables rather than the config file.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    /// Document store account endpoint
    #[serde(default)]
    pub endpoint: String,
    /// Document store master key (base64)
    #[serde(default)]
    pub auth_key: String,
    /// Pre-issued bearer token for the resource API
    #[serde(default)]
    pub bearer_token: String,
}

impl CredentialsConfig {
    pub fn has_bearer_token(&self) -> bool {
        !self.bearer_token.trim().is_empty()
    }
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("endpoint", &self.endpoint)
            .field("auth_key", &redact(&self.auth_key))
            .field("bearer_token", &redact(&self.bearer_token))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}
