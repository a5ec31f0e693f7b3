//! HTTP transport abstraction with retry logic and error handling.
//!
//! [`RedditClient`](crate::client::RedditClient) never talks to reqwest
//! directly; it hands an [`HttpRequest`] to a [`Transport`] and gets back an
//! [`HttpResponse`]. The default implementation is [`ReqwestTransport`].

mod client;
mod retry;

use async_trait::async_trait;
use reqwest::Method;

use crate::client::TransportError;

pub use client::ReqwestTransport;
pub use retry::{
    classify_error, is_retryable_status, RetryPolicy, DEFAULT_TIMEOUT_SECS, MAX_RETRIES,
    RETRY_DELAY_MS,
};

/// A single outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Final response handed back by a transport.
///
/// The body is kept as a `Result` so that a failed body read stays
/// distinguishable from an empty body and never hides the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Result<String, TransportError>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Ok(body.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetch-with-retry capability used by the client.
///
/// Implementations own the retry and timeout policy. They return the last
/// response received (whatever its status) or a [`TransportError`] if no
/// response could be obtained at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
