//! API utilities for frontend-backend communication

/// Base URL for API requests.
///
/// An absolute `base_path` from the config is used as is; a relative one
/// ("/api") is resolved against the origin the bundle was served from.
///
/// # Returns
/// - API base URL like "https://assets.example.com/api", without a trailing slash
/// - The bare `base_path` if window is not available
pub fn api_base(base_path: &str) -> String {
    let base_path = base_path.trim_end_matches('/');
    if base_path.starts_with("http://") || base_path.starts_with("https://") {
        return base_path.to_string();
    }

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, base_path)
}

/// Build a full API URL from a path like "/assets"
pub fn api_url(base_path: &str, path: &str) -> String {
    format!("{}{}", api_base(base_path), path)
}
