//! Health check and build information endpoints

use crate::server::routes::ApiResponse;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Liveness check
///
/// Reports that the process is serving requests. The document store and the
/// resource API are not contacted.
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}

/// Build information
pub async fn version_info() -> ActixResult<HttpResponse> {
    let build = crate::build_info();
    let info = VersionInfo {
        name: Cow::Borrowed(crate::NAME),
        version: Cow::Borrowed(build.version),
        build_time: Cow::Borrowed(build.build_time),
        git_hash: Cow::Borrowed(build.git_hash),
        profile: Cow::Borrowed(build.profile),
        rust_version: Cow::Borrowed(build.rust_version),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(info)))
}

/// Basic health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub name: Cow<'static, str>,
    pub version: Cow<'static, str>,
    /// Seconds since the Unix epoch at build time
    pub build_time: Cow<'static, str>,
    pub git_hash: Cow<'static, str>,
    pub profile: Cow<'static, str>,
    pub rust_version: Cow<'static, str>,
}
