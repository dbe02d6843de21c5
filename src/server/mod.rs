//! HTTP server implementation
//!
//! This module provides the webhook trigger, health endpoints and the
//! server bootstrap.

// Submodules
pub mod middleware;
pub mod routes;

pub mod builder;
pub mod server;
pub mod state;


pub use server::HttpServer;
pub use state::AppState;
