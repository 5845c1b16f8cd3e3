//! Command implementations for the `seo-api` binary.

use std::io::Write;

use anyhow::{Context, Result};
use log::debug;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::http::{ApiClient, ApiResponse};
use crate::seo::SeoApi;

/// Raw request against a path relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    pub method: Method,
    pub path: String,
    pub data: Option<String>,
}

impl RawRequest {
    pub fn new(method: Method, path: impl Into<String>, data: Option<String>) -> Self {
        Self {
            method,
            path: path.into(),
            data,
        }
    }
}

/// Sends `request` and prints the response body.
#[tracing::instrument(skip(client, out))]
pub async fn raw<W: Write>(client: &ApiClient, request: RawRequest, out: &mut W) -> Result<()> {
    let mut descriptor = client.request(request.method, request.path);

    if let Some(data) = &request.data {
        let body: Value = serde_json::from_str(data).context("--data is not valid JSON")?;
        descriptor = descriptor.json(&body)?;
    }

    let response = client.send(descriptor).await?;
    debug!("{} {}", response.status, response.url);
    print_response(&response, out)
}

pub async fn health<A: SeoApi + ?Sized, W: Write>(api: &A, out: &mut W) -> Result<()> {
    print_json(&api.health().await?, out)
}

pub async fn check_url<A: SeoApi + ?Sized, W: Write>(api: &A, url: &str, out: &mut W) -> Result<()> {
    let result = api
        .check_url(url)
        .await
        .with_context(|| format!("Failed to check URL {}", url))?;
    print_json(&result, out)
}

pub async fn check_domain<A: SeoApi + ?Sized, W: Write>(
    api: &A,
    domain: &str,
    out: &mut W,
) -> Result<()> {
    let result = api
        .check_domain(domain)
        .await
        .with_context(|| format!("Failed to check domain {}", domain))?;
    print_json(&result, out)
}

pub async fn check_sitemap<A: SeoApi + ?Sized, W: Write>(
    api: &A,
    domain: &str,
    out: &mut W,
) -> Result<()> {
    let result = api
        .check_sitemap(domain)
        .await
        .with_context(|| format!("Failed to check sitemap for {}", domain))?;
    print_json(&result, out)
}

pub async fn fetch_sitemap_urls<A: SeoApi + ?Sized, W: Write>(
    api: &A,
    sitemap_url: &str,
    out: &mut W,
) -> Result<()> {
    let result = api
        .fetch_sitemap_urls(sitemap_url)
        .await
        .with_context(|| format!("Failed to fetch sitemap {}", sitemap_url))?;
    print_json(&result, out)
}

fn print_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// Pretty-prints JSON bodies, falls back to raw text otherwise.
fn print_response<W: Write>(response: &ApiResponse, out: &mut W) -> Result<()> {
    if response.body.is_empty() {
        return Ok(());
    }
    match response.json::<Value>() {
        Ok(value) => print_json(&value, out),
        Err(_) => {
            writeln!(out, "{}", response.text())?;
            Ok(())
        }
    }
}
