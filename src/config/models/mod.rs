//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod credentials;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod pipeline;
pub mod server;
pub mod store;

// Re-export all configuration types
pub use credentials::*;
pub use graph::*;
pub use ingest::*;
pub use logging::*;
pub use pipeline::*;
pub use server::*;
pub use store::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    7071
}

/// Default timeout in seconds for outbound calls
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    4 * 1024 * 1024 // 4MB
}

pub fn default_webhook_path() -> String {
    "/api/notifications".to_string()
}

pub fn default_graph_base_url() -> String {
    "https://graph.microsoft.com/v1.0".to_string()
}

pub fn default_database() -> String {
    "mailstore".to_string()
}

pub fn default_container() -> String {
    "emails".to_string()
}

pub fn default_partition_key_path() -> String {
    "/Subject".to_string()
}

pub fn default_max_concurrency() -> usize {
    8
}

pub fn default_item_timeout() -> u64 {
    60
}

pub fn default_log_level() -> String {
    "info".to_string()
}
