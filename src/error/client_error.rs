//! Unified error type for the blog client.
//!
//! `ClientError` is what every API client and the session store return.
//! Views turn it into the single line of text they display with
//! [`ClientError::message_or`].

use thiserror::Error;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::network::{classify_http_error, NetworkError};
use super::storage::StorageError;
use super::validation::ValidationError;
use crate::traits::HttpError;

/// Unified error type for the blog client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failures, timeouts and non-auth HTTP errors.
    #[error(transparent)]
    Network(NetworkError),

    /// Missing session, 401 and 403 responses.
    #[error(transparent)]
    Auth(AuthError),

    /// Input rejected before a request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Durable session storage failures.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Build the error for a non-2xx response.
    ///
    /// 401 and 403 become auth errors; everything else is a network error
    /// carrying the server's message.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        match status {
            401 => ClientError::Auth(AuthError::Unauthorized { server_message }),
            403 => ClientError::Auth(AuthError::Forbidden { server_message }),
            _ => ClientError::Network(NetworkError::HttpStatus {
                status,
                server_message,
            }),
        }
    }

    /// Classify a transport error for the request to `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        classify_http_error(err, url).into()
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Network(NetworkError::HttpStatus { .. }) => ErrorCategory::Server,
            ClientError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Server,
            ClientError::Network(_) => ErrorCategory::Network,
            ClientError::Auth(_) => ErrorCategory::Auth,
            ClientError::Validation(_) => ErrorCategory::Validation,
            ClientError::Storage(_) => ErrorCategory::Storage,
        }
    }

    /// The message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Network(err) => err.server_message(),
            ClientError::Auth(err) => err.server_message(),
            _ => None,
        }
    }

    /// The text a form shows for this error.
    ///
    /// Validation errors show their own text. Request failures show the
    /// server's message when it sent one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(err) => err.to_string(),
            _ => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(err) => err.user_message(),
            ClientError::Auth(err) => err.user_message(),
            ClientError::Validation(err) => err.to_string(),
            ClientError::Storage(_) => "Could not access the saved session.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Network(err) => err.error_code(),
            ClientError::Auth(err) => err.error_code(),
            ClientError::Validation(err) => err.error_code(),
            ClientError::Storage(err) => err.error_code(),
        }
    }

    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Check if logging in again might resolve this error.
    pub fn requires_reauth(&self) -> bool {
        match self {
            ClientError::Auth(err) => err.requires_reauth(),
            _ => false,
        }
    }
}

impl From<NetworkError> for ClientError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::HttpStatus {
                status,
                server_message,
            } => ClientError::from_status(status, server_message),
            other => ClientError::Network(other),
        }
    }
}

impl From<AuthError> for ClientError {
    fn from(err: AuthError) -> Self {
        ClientError::Auth(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
