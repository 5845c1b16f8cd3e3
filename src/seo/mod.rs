//! Bindings for the SEO checker backend routes.

mod types;

pub use types::*;

use async_trait::async_trait;
use log::debug;

use crate::http::{ApiClient, ApiError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeoApi: Send + Sync {
    async fn health(&self) -> Result<HealthResponse, ApiError>;
    async fn check_url(&self, url: &str) -> Result<UrlCheckResponse, ApiError>;
    async fn check_domain(&self, domain: &str) -> Result<DomainCheckResponse, ApiError>;
    async fn check_sitemap(&self, domain: &str) -> Result<SitemapCheckResponse, ApiError>;
    async fn fetch_sitemap_urls(&self, sitemap_url: &str)
    -> Result<SitemapUrlsResponse, ApiError>;
}

/// [`SeoApi`] over an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct SeoClient {
    client: ApiClient,
}

impl SeoClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SeoApi for SeoClient {
    #[tracing::instrument(skip(self))]
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.client.get_json("/").await
    }

    #[tracing::instrument(skip(self))]
    async fn check_url(&self, url: &str) -> Result<UrlCheckResponse, ApiError> {
        let request = UrlCheckRequest {
            url: url.to_string(),
        };
        self.client.post_json("/check-url", &request).await
    }

    #[tracing::instrument(skip(self))]
    async fn check_domain(&self, domain: &str) -> Result<DomainCheckResponse, ApiError> {
        let request = DomainRequest {
            domain: domain.to_string(),
        };
        let response: DomainCheckResponse = self.client.post_json("/check-domain", &request).await?;
        debug!("{} is live: {}", response.fixed_domain, response.is_live);
        Ok(response)
    }

    #[tracing::instrument(skip(self))]
    async fn check_sitemap(&self, domain: &str) -> Result<SitemapCheckResponse, ApiError> {
        let request = DomainRequest {
            domain: domain.to_string(),
        };
        self.client.post_json("/check-sitemap", &request).await
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_sitemap_urls(
        &self,
        sitemap_url: &str,
    ) -> Result<SitemapUrlsResponse, ApiError> {
        let request = SitemapFetchRequest {
            sitemap_url: sitemap_url.to_string(),
        };
        let response: SitemapUrlsResponse =
            self.client.post_json("/fetch-sitemap-urls", &request).await?;
        debug!("Fetched {} URLs from {}", response.urls.len(), response.sitemap_url);
        Ok(response)
    }
}
