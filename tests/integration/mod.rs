//! Integration tests for inbox-ingest
//!
//! These tests drive the webhook over HTTP against a mocked resource API
//! and check what ends up in storage.

pub mod config_tests;
pub mod cosmos_pipeline_tests;
pub mod webhook_tests;
