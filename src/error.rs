//! Lookup errors - every way a single attempt can end without a result

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Failure of one lookup attempt.
///
/// The `Display` text is exactly what the error banner shows. Errors travel
/// inside actions, so they stay plain data (no boxed sources).
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LookupError {
    /// Empty or whitespace-only city; never reaches the network
    #[error("Please type a city name.")]
    Validation,

    /// Upstream answered 404
    #[error("City not found")]
    NotFound,

    /// Any other non-success status (status is kept for logs, not shown)
    #[error("Failed to fetch weather")]
    Request { status: u16 },

    /// The request could not complete, or the body could not be parsed
    #[error("{}", transport_message(.0))]
    Transport(String),
}

impl LookupError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            LookupError::NotFound
        } else {
            LookupError::Request { status }
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries the API key.
        LookupError::Transport(describe_chain(&err.without_url()))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

/// Join an error with its sources, e.g. "error sending request: tcp connect
/// error: Connection refused". Adjacent duplicates are skipped.
fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut last = message.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && text != last {
            message.push_str(": ");
            message.push_str(&text);
            last = text;
        }
        source = cause.source();
    }
    message
}

fn transport_message(message: &str) -> &str {
    if message.trim().is_empty() {
        "Error"
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            LookupError::Validation.to_string(),
            "Please type a city name."
        );
        assert_eq!(LookupError::NotFound.to_string(), "City not found");
        assert_eq!(
            LookupError::Request { status: 500 }.to_string(),
            "Failed to fetch weather"
        );
        assert_eq!(
            LookupError::Transport("connection refused".into()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_empty_transport_message_falls_back() {
        assert_eq!(LookupError::Transport(String::new()).to_string(), "Error");
        assert_eq!(LookupError::Transport("  ".into()).to_string(), "Error");
    }

    #[test]
    fn test_from_status() {
        assert_eq!(LookupError::from_status(404), LookupError::NotFound);
        assert_eq!(
            LookupError::from_status(401),
            LookupError::Request { status: 401 }
        );
        assert_eq!(
            LookupError::from_status(503),
            LookupError::Request { status: 503 }
        );
    }

    #[derive(Debug, thiserror::Error)]
    #[error("error sending request")]
    struct Outer(#[source] Middle);

    #[derive(Debug, thiserror::Error)]
    #[error("tcp connect error")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn test_transport_message_includes_causes() {
        let err = Outer(Middle(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));
        assert_eq!(
            describe_chain(&err),
            "error sending request: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_transport_message_without_source() {
        let err = std::io::Error::other("dns error");
        assert_eq!(describe_chain(&err), "dns error");
    }

    #[test]
    fn test_malformed_json_is_transport() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(LookupError::from(err), LookupError::Transport(_)));
    }
}
