//! Master-key request signing
//!
//! The signature is an HMAC-SHA256 over
//! `verb\nresourceType\nresourceLink\ndate\n\n` (verb, type and date
//! lowercased), keyed with the base64-decoded account key.

use crate::utils::error::StoreError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Decoded account master key
#[derive(Clone)]
pub struct MasterKey(Vec<u8>);

impl MasterKey {
    pub fn from_base64(key: &str) -> Result<Self, StoreError> {
        STANDARD
            .decode(key.trim())
            .map(Self)
            .map_err(|e| StoreError::Auth(format!("key is not valid base64: {}", e)))
    }

    /// URL-encoded value for the `Authorization` header
    pub fn authorization(
        &self,
        verb: &str,
        resource_type: &str,
        resource_link: &str,
        date: &str,
    ) -> Result<String, StoreError> {
        let payload = format!(
            "{}\n{}\n{}\n{}\n\n",
            verb.to_lowercase(),
            resource_type.to_lowercase(),
            resource_link,
            date.to_lowercase()
        );

        let mut mac =
            HmacSha256::new_from_slice(&self.0).map_err(|e| StoreError::Auth(e.to_string()))?;
        mac.update(payload.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        let token = format!("type=master&ver=1.0&sig={}", signature);
        Ok(url::form_urlencoded::byte_serialize(token.as_bytes()).collect())
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey(<redacted>)")
    }
}

/// Current time in the RFC 1123 form the service expects
pub(super) fn rfc1123_now() -> String {
    chrono::Utc::now()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
