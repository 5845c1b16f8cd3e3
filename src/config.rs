//! Client configuration resolved once at startup.

use std::env;
use std::time::Duration;

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "API_URL";

/// Base URL used when `API_URL` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Request timeout in milliseconds.
pub const TIMEOUT_MS: u64 = 10_000;

/// Source of environment variables.
#[cfg_attr(test, mockall::automock)]
pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

/// Reads from the process environment.
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    #[tracing::instrument(skip(self))]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

/// Immutable settings shared by every request issued through an
/// [`ApiClient`](crate::http::ApiClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    default_headers: HeaderMap,
    timeout: Duration,
}

impl ClientConfig {
    /// Builds a config from an optional base URL. `None` and `""` fall back
    /// to [`DEFAULT_BASE_URL`].
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = match base_url {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_BASE_URL.to_string(),
        };

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url,
            default_headers,
            timeout: Duration::from_millis(TIMEOUT_MS),
        }
    }

    /// Resolves the base URL from [`BASE_URL_ENV`].
    pub fn from_env<E: Environment + ?Sized>(env: &E) -> Self {
        let base_url = env.var(BASE_URL_ENV).ok();
        let config = Self::new(base_url.as_deref());
        debug!("Resolved API base URL: {}", config.base_url);
        config
    }

    /// Replaces the request timeout. Only available before the client is built.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
