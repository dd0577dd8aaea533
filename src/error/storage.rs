//! Session storage error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by durable session storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not determine the home directory for the default storage path.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Reading or writing the storage file failed.
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stored value could not be (de)serialized.
    #[error("stored value for '{key}' is not valid JSON: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend-specific failure (used by test doubles).
    #[error("storage error: {0}")]
    Other(String),
}

impl StorageError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NoHomeDirectory => "E_STORE_HOME",
            StorageError::Io { .. } => "E_STORE_IO",
            StorageError::Serialization { .. } => "E_STORE_SERDE",
            StorageError::Other(_) => "E_STORE_OTHER",
        }
    }
}
