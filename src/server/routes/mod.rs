//! HTTP route modules

pub mod health;
pub mod notifications;

use actix_web::web;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Register every route; the webhook is mounted at `webhook_path`
pub fn configure_routes(cfg: &mut web::ServiceConfig, webhook_path: &str) {
    health::configure_routes(cfg);
    notifications::configure_routes(cfg, webhook_path);
}
