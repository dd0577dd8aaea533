//! Error handling for the blog client.
//!
//! Three kinds of failure reach a view:
//!
//! | Kind | Type | Shown to the user |
//! |------|------|-------------------|
//! | Validation | [`ValidationError`] | Inline, before any request |
//! | Transport / server | [`NetworkError`], [`AuthError`] | Server message or a per-action fallback |
//! | Silent | any, from like/delete/follow/media upload | Logged only |
//!
//! [`ClientError`] unifies them; [`ClientResult`] is the matching alias.

mod auth;
mod category;
mod client_error;
mod network;
mod result;
mod storage;
mod validation;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use client_error::ClientError;
pub use network::{classify_http_error, extract_server_message, NetworkError};
pub use result::ClientResult;
pub use storage::StorageError;
pub use validation::ValidationError;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::traits::HttpError;

    #[test]
    fn test_status_mapping() {
        let err = ClientError::from_status(401, Some("Invalid credentials".to_string()));
        assert!(matches!(err, ClientError::Auth(AuthError::Unauthorized { .. })));
        assert_eq!(err.category(), ErrorCategory::Auth);
        assert!(err.requires_reauth());

        let err = ClientError::from_status(403, None);
        assert!(matches!(err, ClientError::Auth(AuthError::Forbidden { .. })));
        assert!(!err.requires_reauth());

        let err = ClientError::from_status(500, None);
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_message_or_prefers_server_message() {
        let err = ClientError::from_status(401, Some("Invalid credentials".to_string()));
        assert_eq!(err.message_or("Login failed"), "Invalid credentials");

        let err = ClientError::from_status(500, None);
        assert_eq!(err.message_or("Login failed"), "Login failed");
    }

    #[test]
    fn test_message_or_for_transport_failure_uses_fallback() {
        let err = ClientError::from_http(
            HttpError::ConnectionFailed("connection refused".to_string()),
            "http://localhost:8080/api/v1/auth/login",
        );
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.message_or("Login failed"), "Login failed");
    }

    #[test]
    fn test_message_or_for_validation_uses_own_text() {
        let err: ClientError = ValidationError::MissingFields {
            message: "All fields are required",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.message_or("Registration failed"), "All fields are required");
    }

    #[test]
    fn test_server_error_body_promoted_to_auth() {
        let err = ClientError::from_http(
            HttpError::ServerError {
                status: 401,
                message: r#"{"message":"Authentication required","status":401}"#.to_string(),
            },
            "http://localhost:8080/api/v1/users/me",
        );
        assert!(err.requires_reauth());
        assert_eq!(err.server_message(), Some("Authentication required"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(
            err,
            ClientError::Network(NetworkError::InvalidResponse { .. })
        ));
        assert_eq!(err.error_code(), "E_NET_INVALID");
    }
}
