//! Client configuration.
//!
//! Read once at startup from the environment, overridable with the builder
//! methods.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::STORAGE_DIR;
use crate::error::StorageError;

/// Environment variable holding the server origin.
pub const API_URL_ENV: &str = "ZONEBLOG_API_URL";

/// Environment variable overriding the storage directory.
pub const HOME_ENV: &str = "ZONEBLOG_HOME";

/// Server origin used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Path prefix of every API endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Per-request timeout used when nothing is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`BlogClient`](crate::client::BlogClient).
///
/// # Example
///
/// ```ignore
/// use zoneblog::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_api_base_url("https://blog.example.com")
///     .with_request_timeout(std::time::Duration::from_secs(5));
/// assert_eq!(config.api_root(), "https://blog.example.com/api/v1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server origin, without the `/api/v1` prefix
    pub api_base_url: String,
    /// Directory holding the session file (default: `~/.zoneblog`)
    pub storage_dir: Option<PathBuf>,
    /// Timeout applied to every request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_dir: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server origin.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the directory the session file lives in.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the configuration from `ZONEBLOG_API_URL` and `ZONEBLOG_HOME`.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_blank_var(API_URL_ENV) {
            config = config.with_api_base_url(url);
        } else {
            tracing::debug!("{} not set, using {}", API_URL_ENV, DEFAULT_API_BASE_URL);
        }
        if let Some(dir) = non_blank_var(HOME_ENV) {
            config = config.with_storage_dir(dir);
        }
        config
    }

    /// The root every endpoint path is appended to, e.g.
    /// `http://localhost:8080/api/v1`.
    pub fn api_root(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), API_PREFIX)
    }

    /// The configured storage directory, or `~/.zoneblog`.
    pub fn resolve_storage_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(STORAGE_DIR))
                .ok_or(StorageError::NoHomeDirectory),
        }
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
