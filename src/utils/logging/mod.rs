//! Logging initialisation
//!
//! `RUST_LOG` takes precedence over the configured level when set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{IngestError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| IngestError::config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| IngestError::internal(format!("Failed to install logger: {}", e)))
}

/// Plain text subscriber for the current thread, used while the
/// configuration that selects the real one is still being loaded
pub fn bootstrap_logging() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
