//! Application configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | API_BASE_URL | http://localhost:3000 | Storefront backend address |
//! | REQUEST_TIMEOUT_MS | 30000 | HTTP request timeout (ms) |
//! | LOG_LEVEL | info | Tracing filter directive |

/// Storefront configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL
    pub api_base_url: String,
    /// HTTP request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Log filter (e.g. "info", "debug")
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".into(),
            request_timeout_ms: 30000,
            log_level: "info".into(),
        }
    }
}
