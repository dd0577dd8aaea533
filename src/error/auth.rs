//! Authentication-related error types.
//!
//! This module defines errors related to the session: requests made without
//! a session, and requests the server refused because of who is asking.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No session is held locally (user not logged in).
    NotAuthenticated,

    /// The server rejected the credentials or token (HTTP 401).
    Unauthorized { server_message: Option<String> },

    /// The server refused the action for this user (HTTP 403).
    Forbidden { server_message: Option<String> },
}

impl AuthError {
    /// Check if this error might be resolved by logging in again.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            AuthError::NotAuthenticated | AuthError::Unauthorized { .. }
        )
    }

    /// The message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AuthError::NotAuthenticated => None,
            AuthError::Unauthorized { server_message } | AuthError::Forbidden { server_message } => {
                server_message.as_deref()
            }
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        match self {
            AuthError::NotAuthenticated => "You are not logged in.".to_string(),
            AuthError::Unauthorized { .. } => {
                "Authentication required. Please log in again.".to_string()
            }
            AuthError::Forbidden { .. } => {
                "Access denied. You don't have permission for this action.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "E_AUTH_NONE",
            AuthError::Unauthorized { .. } => "E_AUTH_401",
            AuthError::Forbidden { .. } => "E_AUTH_403",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::Unauthorized { server_message } => match server_message {
                Some(message) => write!(f, "Unauthorized: {}", message),
                None => write!(f, "Unauthorized"),
            },
            AuthError::Forbidden { server_message } => match server_message {
                Some(message) => write!(f, "Forbidden: {}", message),
                None => write!(f, "Forbidden"),
            },
        }
    }
}

impl std::error::Error for AuthError {}
