//! API utilities for frontend-backend communication
//!
//! Resolves the base URL of the sales API and builds endpoint URLs from it.

/// Base URL used when the host page does not configure one
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Name of the `<meta>` tag that overrides the API base URL
pub const API_BASE_META: &str = "sales-api-base";

/// Get the base URL for API requests
///
/// Reads `<meta name="sales-api-base" content="...">` from the current
/// document and falls back to [`DEFAULT_API_BASE`] when the tag is absent,
/// empty, or no window is available.
///
/// # Example
/// ```html
/// <meta name="sales-api-base" content="https://reports.example.com/api">
/// ```
pub fn api_base() -> String {
    let configured = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| {
            doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));

    resolve_api_base(configured.as_deref())
}

/// Normalize a configured base URL, falling back to the default
pub fn resolve_api_base(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Build a full API URL from a base and an endpoint path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:5000/api", "/summary"), "http://localhost:5000/api/summary");
/// ```
pub fn api_url(base: &str, endpoint: &str) -> String {
    format!("{}{}", base, endpoint)
}
