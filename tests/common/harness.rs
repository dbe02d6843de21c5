//! Service wired against the mocked resource API and an in-memory store

use super::TEST_TOKEN;
use super::graph::MockGraph;
use actix_web::http::StatusCode;
use actix_web::{test, web};
use inbox_ingest::config::{Config, PipelineConfig, StoreBackend};
use inbox_ingest::core::events::MemorySink;
use inbox_ingest::server::{AppState, HttpServer};
use inbox_ingest::storage::StoreWriter;
use inbox_ingest::{BatchDispatcher, GraphFetcher, MemoryStore};
use std::sync::Arc;

/// The real pipeline with observable storage and events
pub struct TestService {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub events: Arc<MemorySink>,
}

impl TestService {
    pub fn new(graph: &MockGraph) -> Self {
        Self::with_pipeline(graph, |_| {})
    }

    /// Build with pipeline settings adjusted by `customize`
    pub fn with_pipeline<F>(graph: &MockGraph, customize: F) -> Self
    where
        F: FnOnce(&mut PipelineConfig),
    {
        Self::from_config(Self::config(graph, customize))
    }

    /// Build from a complete configuration; the store backend setting is ignored
    pub fn from_config(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let events = Arc::new(MemorySink::new());
        let fetcher = GraphFetcher::new(config.graph(), config.credentials())
            .expect("fetcher should build");
        let dispatcher = BatchDispatcher::new(
            config.pipeline(),
            Arc::new(fetcher),
            StoreWriter::new(store.clone()),
            events.clone(),
        );

        Self {
            state: AppState::new(config, dispatcher),
            store,
            events,
        }
    }

    /// Configuration pointing at `graph` with the memory backend
    pub fn config<F>(graph: &MockGraph, customize: F) -> Config
    where
        F: FnOnce(&mut PipelineConfig),
    {
        let mut config = Config::default();
        config.ingest.graph.base_url = graph.base_url();
        config.ingest.graph.timeout_secs = 5;
        config.ingest.credentials.bearer_token = TEST_TOKEN.to_string();
        config.ingest.store.backend = StoreBackend::Memory;
        customize(&mut config.ingest.pipeline);
        config
    }

    pub fn data(&self) -> web::Data<AppState> {
        web::Data::new(self.state.clone())
    }

    /// POST `body` to the webhook and return the status
    pub async fn post_batch(&self, body: &serde_json::Value) -> StatusCode {
        self.post_raw(body.to_string()).await
    }

    /// POST a raw body to the webhook and return the status
    pub async fn post_raw(&self, body: impl Into<String>) -> StatusCode {
        let app = test::init_service(HttpServer::create_app(self.data())).await;
        let req = test::TestRequest::post()
            .uri(&self.state.config.server().webhook_path)
            .insert_header(("content-type", "application/json"))
            .set_payload(body.into())
            .to_request();
        test::call_service(&app, req).await.status()
    }

    /// Subjects of all stored records, sorted
    pub fn stored_subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = self
            .store
            .records()
            .into_iter()
            .map(|record| record.subject)
            .collect();
        subjects.sort();
        subjects
    }
}
