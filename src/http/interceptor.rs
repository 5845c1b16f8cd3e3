//! Hooks run around every request issued by [`ApiClient`](super::ApiClient).
//!
//! Interceptors observe traffic; they never alter a request, a response or
//! an error. The stock [`LoggingInterceptor`] writes one line per request and
//! one line per failed response.

use super::{ApiError, ApiResponse, RequestDescriptor};

/// Called with each outgoing request just before it is dispatched.
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, descriptor: RequestDescriptor) -> RequestDescriptor;
}

/// Called with the outcome of each request before it reaches the caller.
pub trait ResponseInterceptor: Send + Sync {
    fn on_success(&self, response: ApiResponse) -> ApiResponse {
        response
    }

    /// Observes a failure and hands the same error back for propagation.
    fn on_failure(&self, error: ApiError) -> ApiError;

    fn intercept(&self, result: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        match result {
            Ok(response) => Ok(self.on_success(response)),
            Err(error) => Err(self.on_failure(error)),
        }
    }
}

/// Destination for diagnostic lines.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, line: &str);
    fn error(&self, line: &str);
}

/// Writes diagnostic lines through the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, line: &str) {
        log::info!("{}", line);
    }

    fn error(&self, line: &str) {
        log::error!("{}", line);
    }
}

/// `[API] <METHOD> <url> <descriptor>`
pub fn request_log_line(descriptor: &RequestDescriptor) -> String {
    format!(
        "[API] {} {} {:?}",
        descriptor.method_name(),
        descriptor.url,
        descriptor
    )
}

/// `[API ERROR] <error>`
pub fn error_log_line(error: &ApiError) -> String {
    format!("[API ERROR] {}", error)
}

/// Logs requests and failed responses, passing everything through.
pub struct LoggingInterceptor<S: DiagnosticSink = LogSink> {
    sink: S,
}

impl LoggingInterceptor<LogSink> {
    pub fn new() -> Self {
        Self { sink: LogSink }
    }
}

impl Default for LoggingInterceptor<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> LoggingInterceptor<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }
}

impl<S: DiagnosticSink> RequestInterceptor for LoggingInterceptor<S> {
    fn on_request(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        self.sink.info(&request_log_line(&descriptor));
        descriptor
    }
}

impl<S: DiagnosticSink> ResponseInterceptor for LoggingInterceptor<S> {
    fn on_failure(&self, error: ApiError) -> ApiError {
        self.sink.error(&error_log_line(&error));
        error
    }
}
