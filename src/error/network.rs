//! Network-related error types.
//!
//! This module defines errors that occur while talking to the blog API:
//! connection failures, timeouts, non-2xx responses and undecodable bodies.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    ///
    /// `server_message` is the `message` field of the JSON error body, when
    /// the server supplied one.
    HttpStatus {
        status: u16,
        server_message: Option<String>,
    },

    /// The response body did not match the expected shape.
    InvalidResponse { message: String },

    /// Invalid request URL.
    InvalidUrl { url: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient.
    ///
    /// Informational only: the client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// The message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            NetworkError::HttpStatus { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The server took too long to respond. Please try again.".to_string()
            }
            NetworkError::HttpStatus {
                server_message: Some(message),
                ..
            } => message.clone(),
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                409 => "The request conflicts with existing data.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the server.".to_string()
            }
            NetworkError::InvalidUrl { .. } => "The server address is invalid.".to_string(),
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus {
                status,
                server_message,
            } => match server_message {
                Some(message) => write!(f, "HTTP {} error: {}", status, message),
                None => write!(f, "HTTP {} error", status),
            },
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport-level error into a NetworkError.
///
/// `url` is the request URL, used for diagnostics only.
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            url: url.to_string(),
        },
        HttpError::ServerError { status, message } => NetworkError::HttpStatus {
            status,
            server_message: extract_server_message(message.as_bytes()),
        },
        HttpError::Cancelled => NetworkError::Cancelled,
        HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
            url: url.to_string(),
        },
        HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
    }
}

/// Pull the `message` field out of an error body such as
/// `{"message": "Invalid credentials", "status": 401}`.
///
/// Blank messages count as absent.
pub fn extract_server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_server_message() {
        let body = br#"{"message":"Invalid credentials","status":401}"#;
        assert_eq!(
            extract_server_message(body),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_extract_server_message_missing_or_blank() {
        assert_eq!(extract_server_message(br#"{"status":500}"#), None);
        assert_eq!(extract_server_message(br#"{"message":"   "}"#), None);
        assert_eq!(extract_server_message(br#"{"message":42}"#), None);
        assert_eq!(extract_server_message(b"<html>oops</html>"), None);
        assert_eq!(extract_server_message(b""), None);
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = NetworkError::HttpStatus {
            status: 400,
            server_message: Some("Title is required".to_string()),
        };
        assert_eq!(err.user_message(), "Title is required");
        assert_eq!(err.server_message(), Some("Title is required"));

        let err = NetworkError::HttpStatus {
            status: 404,
            server_message: None,
        };
        assert_eq!(err.user_message(), "The requested resource was not found.");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_is_retryable() {
        assert!(NetworkError::Timeout {
            url: "http://x".to_string()
        }
        .is_retryable());
        assert!(NetworkError::HttpStatus {
            status: 503,
            server_message: None
        }
        .is_retryable());
        assert!(!NetworkError::HttpStatus {
            status: 400,
            server_message: None
        }
        .is_retryable());
        assert!(!NetworkError::Cancelled.is_retryable());
    }

    #[test]
    fn test_classify_http_error() {
        let err = classify_http_error(
            HttpError::ServerError {
                status: 409,
                message: r#"{"message":"Email already registered"}"#.to_string(),
            },
            "http://localhost:8080/api/v1/auth/register",
        );
        assert_eq!(
            err,
            NetworkError::HttpStatus {
                status: 409,
                server_message: Some("Email already registered".to_string()),
            }
        );

        let err = classify_http_error(
            HttpError::ConnectionFailed("refused".to_string()),
            "http://localhost:1",
        );
        assert!(matches!(err, NetworkError::ConnectionFailed { .. }));
        assert_eq!(err.error_code(), "E_NET_CONN");
    }

    #[test]
    fn test_display() {
        let err = NetworkError::HttpStatus {
            status: 500,
            server_message: Some("boom".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 500 error: boom");
        assert_eq!(NetworkError::Cancelled.to_string(), "Request cancelled");
    }
}
