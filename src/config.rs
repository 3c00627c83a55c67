//! Backend endpoint configuration

use std::env;

/// Default hosted backend deployment
pub const DEFAULT_API_URL: &str = "https://classtrack-backend.onrender.com";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "CLASSTRACK_API_URL";

/// Resolve the backend base URL
///
/// Priority: explicit `--api-url` flag, then `CLASSTRACK_API_URL`, then the
/// built-in default. Trailing slashes are trimmed so paths can be appended
/// verbatim.
pub fn resolve_api_url(flag: Option<&str>) -> String {
    let url = flag
        .map(ToString::to_string)
        .or_else(|| env::var(API_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}
