//! Input validation errors.
//!
//! Raised by view models before any request goes out; the display text is
//! exactly what the form shows inline.

use thiserror::Error;

/// Validation failures for form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty.
    #[error("{message}")]
    MissingFields { message: &'static str },

    /// A free-text field is outside its allowed length.
    #[error("{message}")]
    InvalidLength { message: &'static str },

    /// The selected file is neither an image nor a video.
    #[error("Please select an image or video file")]
    UnsupportedMediaType { mime_type: String },
}

impl ValidationError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => "E_VAL_MISSING",
            ValidationError::InvalidLength { .. } => "E_VAL_LENGTH",
            ValidationError::UnsupportedMediaType { .. } => "E_VAL_MEDIA",
        }
    }
}
