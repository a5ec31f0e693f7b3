//! reqwest-backed transport with built-in retry logic.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use super::retry::{classify_error, is_retryable_status, RetryPolicy};
use super::{HttpRequest, HttpResponse, Transport};
use crate::client::TransportError;

/// HTTP transport with built-in retry logic for network operations.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    policy: RetryPolicy,
}

impl ReqwestTransport {
    /// Builds a transport with its own connection pool.
    pub fn new(policy: RetryPolicy) -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self::with_client(client, policy))
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Single attempt without retry.
    async fn fetch_once(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .timeout(self.policy.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify_error(&e, self.policy.timeout))?;

        let status = response.status().as_u16();
        debug!("Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()));

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let attempts = self.policy.attempts();
        let mut last_error = None;

        for attempt in 1..=attempts {
            debug!("{} {} (attempt {}/{})", request.method, request.url, attempt, attempts);

            match self.fetch_once(&request).await {
                Ok(response) if is_retryable_status(response.status) && attempt < attempts => {
                    warn!(
                        "{}: attempt {}/{} returned {}, retrying in {:?}...",
                        request.url, attempt, attempts, response.status, self.policy.delay
                    );
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempt < attempts {
                        warn!(
                            "{}: attempt {}/{} failed ({}), retrying in {:?}...",
                            request.url, attempt, attempts, e, self.policy.delay
                        );
                    }
                    last_error = Some(e);
                }
            }

            if attempt < attempts {
                tokio::time::sleep(self.policy.delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            TransportError::Network(format!("{}: failed after {} attempts", request.url, attempts))
        }))
    }
}
