use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{HttpResponse, HttpTransport};
use crate::error::TransportError;

/// [`HttpTransport`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client identifying itself with `user_agent`, or the crate
    /// name and version when `None`.
    pub fn new(user_agent: Option<&str>) -> Result<Self, TransportError> {
        let agent = match user_agent {
            Some(ua) => ua.to_string(),
            None => format!("hrdlog/{}", env!("CARGO_PKG_VERSION")),
        };
        let client = Client::builder()
            .user_agent(agent)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .form(form)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
