use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `GET /` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlCheckRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingTag {
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateHreflang {
    pub hreflang: String,
    pub href: String,
}

/// Technical and SEO data reported for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlCheckResponse {
    pub url: String,
    pub http_status: Option<u16>,
    pub redirected: bool,
    pub final_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub canonical_matches: Option<bool>,
    pub h1: Option<String>,
    #[serde(default)]
    pub all_h1: Vec<String>,
    #[serde(default)]
    pub headings: Vec<HeadingTag>,
    pub robots_meta: Option<String>,
    pub x_robots_tag: Option<String>,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub open_graph: HashMap<String, String>,
    #[serde(default)]
    pub twitter_meta: HashMap<String, String>,
    pub schema_json_ld: Option<String>,
    #[serde(default)]
    pub alternate_hreflang: Vec<AlternateHreflang>,
    pub lang: Option<String>,
    pub favicon_url: Option<String>,
    pub message: String,
}

/// Body for `/check-domain` and `/check-sitemap`.
///
/// The backend prepends `https://` when the scheme is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRequest {
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCheckResponse {
    pub fixed_domain: String,
    pub dns_status: String,
    pub http_status: Option<u16>,
    pub is_live: bool,
    pub redirected: Option<bool>,
    pub final_url: Option<String>,
    #[serde(default)]
    pub redirect_chain: Vec<String>,
    /// Seconds.
    pub response_time: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapCheckResponse {
    pub sitemap_url: String,
    pub sitemap_status: String,
    pub http_status: Option<u16>,
    #[serde(default)]
    pub sitemap_files: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapFetchRequest {
    pub sitemap_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapUrlsResponse {
    pub sitemap_url: String,
    pub sitemap_status: String,
    pub http_status: Option<u16>,
    #[serde(default)]
    pub urls: Vec<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_response_with_nulls() {
        let json = r#"{
            "fixed_domain": "https://nope.invalid",
            "dns_status": "NXDOMAIN",
            "http_status": null,
            "is_live": false,
            "redirected": null,
            "final_url": null,
            "redirect_chain": [],
            "response_time": null,
            "message": "DNS issue: NXDOMAIN"
        }"#;

        let parsed: DomainCheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.dns_status, "NXDOMAIN");
        assert_eq!(parsed.http_status, None);
        assert!(!parsed.is_live);
    }

    #[test]
    fn test_sitemap_response_lists_default_to_empty() {
        let json = r#"{
            "sitemap_url": "https://example.com/sitemap.xml",
            "sitemap_status": "error",
            "http_status": 404,
            "message": "Sitemap returned status 404."
        }"#;

        let parsed: SitemapCheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.http_status, Some(404));
        assert!(parsed.sitemap_files.is_empty());
        assert!(parsed.urls.is_empty());
    }
}
