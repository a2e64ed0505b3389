//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// # Returns
/// - Backend URL without a trailing slash, e.g. "http://localhost:8000"
pub fn api_base() -> String {
    config().backend.base_url.clone()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```ignore
/// let url = api_url("/api/cabinets");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
