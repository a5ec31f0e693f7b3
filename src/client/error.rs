use serde_json::Value;
use std::fmt;

/// Maximum number of characters of a raw response body kept in error details.
pub const MAX_DETAIL_CHARS: usize = 500;

/// Failures reported by a [`Transport`](crate::http::Transport) once its retries are spent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),
    /// Connection, DNS or protocol level failure.
    #[error("network error: {0}")]
    Network(String),
    /// The status line arrived but the body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Diagnostic payload attached to a failed request.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetails {
    /// The error body parsed as JSON.
    Json(Value),
    /// Raw body text, truncated to [`MAX_DETAIL_CHARS`] characters.
    Text(String),
}

impl ErrorDetails {
    /// Builds text details, keeping at most [`MAX_DETAIL_CHARS`] characters.
    pub fn truncated(text: &str) -> Self {
        ErrorDetails::Text(text.chars().take(MAX_DETAIL_CHARS).collect())
    }

    /// Converts the details into a JSON value for host-facing output.
    pub fn to_value(&self) -> Value {
        match self {
            ErrorDetails::Json(value) => value.clone(),
            ErrorDetails::Text(text) => Value::String(text.clone()),
        }
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetails::Json(value) => write!(f, "{}", value),
            ErrorDetails::Text(text) => write!(f, "{}", text),
        }
    }
}

// Define a custom error type for handling Reddit API errors
#[derive(Debug, thiserror::Error)]
pub enum RedditClientError {
    /// A required argument was missing or malformed. No request was sent.
    #[error("{0}")]
    InvalidArgument(String),

    /// Reddit answered with a non-success status.
    #[error("{message}")]
    Request {
        message: String,
        status: u16,
        details: ErrorDetails,
    },

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RedditClientError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RedditClientError::InvalidArgument(msg.into())
    }

    /// HTTP status of a rejected request, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RedditClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Details of a rejected request, if this error carries them.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            RedditClientError::Request { details, .. } => Some(details),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            RedditClientError::Transport(TransportError::Timeout(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncated_details_keep_500_chars() {
        let body = "x".repeat(800);
        match ErrorDetails::truncated(&body) {
            ErrorDetails::Text(text) => assert_eq!(text.len(), MAX_DETAIL_CHARS),
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_truncated_details_count_chars_not_bytes() {
        let body = "é".repeat(600);
        match ErrorDetails::truncated(&body) {
            ErrorDetails::Text(text) => assert_eq!(text.chars().count(), MAX_DETAIL_CHARS),
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_request_error_accessors() {
        let err = RedditClientError::Request {
            message: "Reddit search failed (404)".to_string(),
            status: 404,
            details: ErrorDetails::Json(json!({"error": "not found"})),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.details().map(ErrorDetails::to_value),
            Some(json!({"error": "not found"}))
        );
        assert_eq!(err.to_string(), "Reddit search failed (404)");
    }

    #[test]
    fn test_timeout_is_distinguishable() {
        let err = RedditClientError::from(TransportError::Timeout(
            std::time::Duration::from_secs(5),
        ));
        assert!(err.is_timeout());
        assert_eq!(err.status(), None);

        let err = RedditClientError::from(TransportError::Network("reset".to_string()));
        assert!(!err.is_timeout());
    }
}
