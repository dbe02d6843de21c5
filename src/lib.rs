//! # inbox-ingest
//!
//! Webhook-driven mail ingestion. A subscription on a mailbox delivers change
//! notification batches to this service; for each notification the referenced
//! message is fetched from the resource API and inserted into a document store
//! partitioned by subject.
//!
//! ## Features
//!
//! - **Per-item isolation**: a failing notification is logged and skipped,
//!   the rest of the batch still completes
//! - **Subscription handshake**: `validationToken` requests are echoed back
//! - **Pluggable storage**: Cosmos DB over its REST API, or in-memory
//! - **Bounded concurrency**: notifications in a batch are processed in
//!   parallel up to a configured limit
//!
//! ## Service Mode
//!
//! ```rust,no_run
//! use inbox_ingest::{Config, IngestService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::from_file("config/ingest.yaml").await?;
//!     config.apply_env()?;
//!     let service = IngestService::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{IngestError, Result};

pub use core::{
    BatchDispatcher, BatchReport, FetchedResource, GraphFetcher, Notification,
    NotificationBatch, RecordTransformer, ResourceFetcher, StorageRecord, decode_batch,
};
pub use storage::{CosmosStore, DocumentStore, MemoryStore};

use tracing::info;

/// The ingestion service: configuration plus a ready-to-start HTTP server
pub struct IngestService {
    config: Config,
    server: server::HttpServer,
}

impl IngestService {
    /// Create a new service instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new ingestion service instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the service until the server stops
    pub async fn run(self) -> Result<()> {
        info!("Starting inbox ingestion service");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
    pub git_hash: &'static str,
    /// Cargo profile the binary was built with
    pub profile: &'static str,
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("INGEST_BUILD_TIME"),
            git_hash: env!("INGEST_GIT_HASH"),
            profile: env!("INGEST_BUILD_PROFILE"),
            rust_version: env!("INGEST_RUSTC_VERSION"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
