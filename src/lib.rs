//! Shared, pre-configured HTTP client for the SEO checker backend.
//!
//! ```no_run
//! # async fn run() -> Result<(), seo_api_client::http::ApiError> {
//! let client = seo_api_client::shared::shared()?;
//! let users: serde_json::Value = client.get_json("/users").await?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod seo;
pub mod shared;
