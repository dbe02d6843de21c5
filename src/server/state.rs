//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::dispatcher::BatchDispatcher;
use crate::core::events::{EventSink, TracingSink};
use crate::core::fetcher::GraphFetcher;
use crate::storage::{self, StoreWriter};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// The HTTP client and store client inside the dispatcher are reused by
/// every request and hold no per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Batch pipeline
    pub dispatcher: Arc<BatchDispatcher>,
}

impl AppState {
    pub fn new(config: Config, dispatcher: BatchDispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Wire fetcher, store and event sink from configuration
    pub async fn from_config(config: Config) -> Result<Self> {
        Self::from_config_with_events(config, Arc::new(TracingSink)).await
    }

    /// Same as [`AppState::from_config`] with a caller-supplied event sink
    pub async fn from_config_with_events(
        config: Config,
        events: Arc<dyn EventSink>,
    ) -> Result<Self> {
        let fetcher = GraphFetcher::new(config.graph(), config.credentials())?;
        let store = storage::connect(&config).await?;
        info!("Document store ready: {}", store.name());

        let dispatcher = BatchDispatcher::new(
            config.pipeline(),
            Arc::new(fetcher),
            StoreWriter::new(store),
            events,
        );

        Ok(Self::new(config, dispatcher))
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
