//! Server bootstrap
//!
//! Resolves configuration (file, then environment) and starts the server.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from `path`, falling back to defaults, then overlay env
pub async fn load_config(path: &Path) -> Result<Config> {
    let mut config = if path.exists() {
        Config::from_file(path).await?
    } else {
        warn!(
            "Configuration file {} not found, using defaults",
            path.display()
        );
        Config::default()
    };

    config.apply_env()?;
    config.validate()?;
    Ok(config)
}

/// Run the server with an already-loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting inbox ingestion service");

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /version - Build information");
    info!(
        "   GET|POST {} - Change notification webhook",
        config.server().webhook_path
    );

    server.start().await
}
