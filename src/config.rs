//! Client configuration.
//!
//! This is the only place that reads the process environment. The client
//! itself is built from explicit values so it can be tested without touching
//! global state.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `SCANIX_API_URL` | Base URL of the prediction service |
//! | `VITE_API_URL` | Fallback base URL (shared with the web front end) |
//! | `SCANIX_PROXY_URL` | Optional HTTP(S) proxy for all requests |

use std::env;

/// Loopback address used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub const API_URL_ENV: &str = "SCANIX_API_URL";
pub const FALLBACK_API_URL_ENV: &str = "VITE_API_URL";
pub const PROXY_URL_ENV: &str = "SCANIX_PROXY_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub proxy_url: Option<String>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let base_url = non_empty(API_URL_ENV)
            .or_else(|| non_empty(FALLBACK_API_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            proxy_url: non_empty(PROXY_URL_ENV),
            ..Self::default()
        }
    }

    /// Full URL of a route under the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy_url: None,
            user_agent: format!("scanix-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
