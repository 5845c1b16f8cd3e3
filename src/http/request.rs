//! Outgoing request descriptors and URL resolution.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;

use super::ApiError;

/// Everything the client knows about a request before it is dispatched.
///
/// `url` is kept exactly as the caller wrote it (usually a path relative to
/// the base URL); [`resolve_url`] turns it into the address actually used.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Sets a header, replacing any value already present for `name`.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Serializes `body` as the JSON request payload.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Uppercased method name as it appears in log lines.
    pub fn method_name(&self) -> String {
        self.method.as_str().to_uppercase()
    }
}

/// Returns true for `scheme://host` and protocol-relative `//host` URLs.
pub fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }

    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid_scheme && rest.starts_with("//")
}

/// Joins `url` onto `base_url` unless `url` is already absolute.
///
/// Protocol-relative URLs (`//host/path`) take their scheme from `base_url`,
/// or `http` when the base has none.
pub fn resolve_url(base_url: &str, url: &str) -> String {
    if url.starts_with("//") {
        let scheme = base_url
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .unwrap_or("http");
        return format!("{}:{}", scheme, url);
    }
    if is_absolute_url(url) {
        return url.to_string();
    }
    if url.is_empty() {
        return base_url.to_string();
    }

    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let path = url.trim_start_matches('/');
    format!("{}/{}", base, path)
}
