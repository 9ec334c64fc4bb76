//! API utilities for talking to the invoice backend
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// The API is served from the same origin as the page; the base is derived
/// from the current window location.
///
/// # Returns
/// - Base URL like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    location.origin().unwrap_or_default()
}
