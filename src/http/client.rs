//! Pre-configured HTTP client with request and response interceptors.

use std::sync::Arc;

use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::interceptor::{LoggingInterceptor, RequestInterceptor, ResponseInterceptor};
use super::request::resolve_url;
use super::{ApiError, ApiResponse, RequestDescriptor};
use crate::config::{ClientConfig, Environment};

/// HTTP client bound to one backend.
///
/// Cloning is cheap and every clone shares the same connection pool,
/// configuration and interceptors.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<ClientConfig>,
    request_interceptor: Arc<dyn RequestInterceptor>,
    response_interceptor: Arc<dyn ResponseInterceptor>,
}

impl ApiClient {
    /// Creates a client that logs through [`LoggingInterceptor`].
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let logger = Arc::new(LoggingInterceptor::new());
        Self::with_interceptors(config, logger.clone(), logger)
    }

    /// Creates a client configured from the environment.
    pub fn from_env<E: Environment + ?Sized>(env: &E) -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env(env))
    }

    pub fn with_interceptors(
        config: ClientConfig,
        request_interceptor: Arc<dyn RequestInterceptor>,
        response_interceptor: Arc<dyn ResponseInterceptor>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(config.default_headers().clone())
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::ClientBuild)?;

        debug!(
            "API client configured for {} with {}ms timeout",
            config.base_url(),
            config.timeout().as_millis()
        );

        Ok(Self {
            client,
            config: Arc::new(config),
            request_interceptor,
            response_interceptor,
        })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Starts a descriptor carrying the default headers and timeout.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestDescriptor {
        let mut descriptor = RequestDescriptor::new(method, url);
        descriptor.headers = self.config.default_headers().clone();
        descriptor.timeout = Some(self.config.timeout());
        descriptor
    }

    pub async fn get(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::GET, url)).await
    }

    pub async fn delete(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::DELETE, url)).await
    }

    pub async fn head(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::HEAD, url)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send_json(Method::POST, url, body).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send_json(Method::PUT, url, body).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send_json(Method::PATCH, url, body).await
    }

    /// Performs a GET request and deserializes the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.get(url).await?.json()
    }

    /// Performs a POST request with a JSON body and deserializes the JSON response.
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post(url, body).await?.json()
    }

    /// Dispatches a request through both interceptors.
    ///
    /// Non-2xx responses are failures. Every failure passes through the
    /// response interceptor exactly once and is returned unchanged.
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<ApiResponse, ApiError> {
        self.exchange(descriptor, None).await
    }

    /// Sends `body` as JSON. An unserializable body still goes through both
    /// interceptors, as an [`ApiError::Encode`] failure.
    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let mut descriptor = self.request(method, url);
        match serde_json::to_value(body) {
            Ok(value) => {
                descriptor.body = Some(value);
                self.exchange(descriptor, None).await
            }
            Err(source) => self.exchange(descriptor, Some(ApiError::Encode(source))).await,
        }
    }

    /// Runs the request interceptor, then either dispatches or fails with
    /// `pending`, then runs the response interceptor on the outcome.
    #[tracing::instrument(skip(self, descriptor, pending), fields(method = %descriptor.method, url = %descriptor.url))]
    async fn exchange(
        &self,
        descriptor: RequestDescriptor,
        pending: Option<ApiError>,
    ) -> Result<ApiResponse, ApiError> {
        let descriptor = self.request_interceptor.on_request(descriptor);
        let result = match pending {
            Some(error) => Err(error),
            None => self.dispatch(descriptor).await,
        };
        self.response_interceptor.intercept(result)
    }

    async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<ApiResponse, ApiError> {
        let url = resolve_url(self.config.base_url(), &descriptor.url);
        let timeout = descriptor.timeout.unwrap_or_else(|| self.config.timeout());

        let mut headers = self.config.default_headers().clone();
        headers.extend(descriptor.headers);

        let mut builder = self
            .client
            .request(descriptor.method, &url)
            .headers(headers)
            .timeout(timeout);

        if !descriptor.query.is_empty() {
            builder = builder.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            builder = builder.body(serde_json::to_vec(body).map_err(ApiError::Encode)?);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, timeout, e))?;

        let status = response.status();
        let final_url = response.url().to_string();
        let response_headers: HeaderMap = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, timeout, e))?
            .to_vec();

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: final_url,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(ApiResponse {
            status,
            url: final_url,
            headers: response_headers,
            body,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
