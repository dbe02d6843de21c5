//! Common test utilities for inbox-ingest
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{MockGraph, NotificationFactory, TestService};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let graph = MockGraph::start().await;
//!     graph.mount_message("Users/u/Messages/1", "Hi", "<p>Hello</p>").await;
//!     let service = TestService::new(&graph);
//!     let body = NotificationFactory::batch(&[
//!         NotificationFactory::created("s1", "Users/u/Messages/1"),
//!     ]);
//!     // ...
//! }
//! ```

pub mod harness;

pub use fixtures::{MessageFactory, NotificationFactory};
pub use graph::MockGraph;
pub use harness::TestService;

/// Bearer token the mocked resource API expects
pub const TEST_TOKEN: &str = "test-access-token";
/// A valid base64 master key for the mocked document store
pub const TEST_STORE_KEY: &str = "dGVzdC1tYXN0ZXIta2V5LWZvci1pbnRlZ3JhdGlvbg==";
