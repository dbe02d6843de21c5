//! Utility modules for the ingestion service
//!
//! - **error**: Error taxonomy and HTTP mapping
//! - **logging**: tracing-subscriber initialisation

pub mod error;
pub mod logging;

pub use logging::{bootstrap_logging, init_logging};

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Check if a string is a valid URL
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}
