//! Configured HTTP client with logging interceptors.

mod client;
mod error;
pub mod interceptor;
mod request;
mod response;

pub use client::ApiClient;
pub use error::ApiError;
pub use interceptor::{LoggingInterceptor, RequestInterceptor, ResponseInterceptor};
pub use request::{RequestDescriptor, is_absolute_url, resolve_url};
pub use response::ApiResponse;
