//! Client-side API error type.
//!
//! The taxonomy is deliberately flat: callers only ever distinguish success
//! from failure, so transport errors, non-2xx statuses, and body decode
//! failures all collapse into one enum surfaced as a user-facing message.

use thiserror::Error;

/// Error returned by every `/api/*` call made from the client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_code() {
        let err = ApiError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }
}
