//! HTTP transport capability.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

/// `reqwest`-backed transport.
pub mod http;

pub use http::ReqwestTransport;

/// Status and body of a completed POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one form-encoded POST.
///
/// Non-success statuses are returned as a normal [`HttpResponse`]; only
/// failures to complete the exchange are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Posts `form` to `url`, giving up after `timeout`.
    async fn post_form(
        &self,
        url: &str,
        form: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;
}
