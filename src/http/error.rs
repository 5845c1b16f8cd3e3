//! Failures surfaced to callers of [`ApiClient`](super::ApiClient).

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Error returned by every request issued through the client.
///
/// The response interceptor observes these before they reach the caller but
/// never changes them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {}: {url}", .status.as_u16())]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("timeout of {}ms exceeded: {url}", .timeout.as_millis())]
    Timeout {
        url: String,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    /// Connection refused, DNS failure, broken body stream and the like.
    #[error("Network error: {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be built, e.g. the resolved URL does not parse.
    #[error("Invalid request: {url}: {source}")]
    InvalidRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Maps a reqwest failure, separating build errors and timeouts from network errors.
    pub(crate) fn from_reqwest(url: &str, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_builder() {
            ApiError::InvalidRequest {
                url: url.to_string(),
                source,
            }
        } else if source.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                timeout,
                source,
            }
        } else {
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// HTTP status, when the server produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            url: "http://localhost:8000/users".to_string(),
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status code 404: http://localhost:8000/users"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_builder_error_is_invalid_request() {
        let source = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let err = ApiError::from_reqwest("not a url", Duration::from_secs(10), source);

        assert!(matches!(err, ApiError::InvalidRequest { .. }));
        assert!(err.to_string().starts_with("Invalid request: not a url"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_encode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::Encode(source);
        assert!(err.to_string().contains("encode"));
        assert_eq!(err.status(), None);
    }
}
