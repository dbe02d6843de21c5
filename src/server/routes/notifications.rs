//! Change notification webhook
//!
//! Accepts GET and POST. A `validationToken` query parameter is the
//! subscription handshake and is echoed back as plain text; anything else is
//! treated as a notification batch.

use crate::server::state::AppState;
use crate::utils::error::IngestError;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{debug, info};

/// Configure the webhook route
pub fn configure_routes(cfg: &mut web::ServiceConfig, webhook_path: &str) {
    cfg.service(
        web::resource(webhook_path)
            .route(web::get().to(receive_notifications))
            .route(web::post().to(receive_notifications)),
    );
}

/// Query parameters the webhook understands
#[derive(Debug, Default, Deserialize)]
pub struct WebhookQuery {
    #[serde(rename = "validationToken")]
    pub validation_token: Option<String>,
}

/// Webhook entry point
///
/// Returns 204 once every notification in a decoded batch has been
/// attempted, whatever the per-item results, and 400 when the body is not a
/// notification batch.
pub async fn receive_notifications(
    state: web::Data<AppState>,
    query: web::Query<WebhookQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, IngestError> {
    if let Some(token) = query.into_inner().validation_token {
        info!("Subscription validation request received");
        return Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(token));
    }

    debug!("Notification payload received ({} bytes)", body.len());

    // The batch runs on its own task so a disconnecting sender cannot cut it short
    let dispatcher = state.dispatcher.clone();
    let report = tokio::spawn(async move { dispatcher.handle_payload(&body).await })
        .await
        .map_err(|e| IngestError::internal(format!("Batch task failed: {}", e)))??;

    debug!(
        "Batch finished: {} stored, {} failed",
        report.stored(),
        report.failed()
    );

    Ok(HttpResponse::NoContent().finish())
}
