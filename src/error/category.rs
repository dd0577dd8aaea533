//! Error category classification.
//!
//! Categories map onto the three kinds of failure a view deals with:
//! input rejected before any request, requests that failed, and local
//! storage trouble that never reaches the user.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or malformed input, caught before any request is sent.
    /// Shown inline next to the form.
    Validation,

    /// Connection failures and timeouts.
    Network,

    /// Non-success responses from the API (4xx other than auth, 5xx).
    Server,

    /// The session is missing, expired or not allowed to do this.
    Auth,

    /// Durable session storage could not be read or written.
    Storage,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Storage => "storage",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Please check your input and try again",
            ErrorCategory::Network => "Check your connection and try again",
            ErrorCategory::Server => "The server may be experiencing issues. Please try again later",
            ErrorCategory::Auth => "Try logging out and logging back in",
            ErrorCategory::Storage => "Check permissions on the session directory",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
