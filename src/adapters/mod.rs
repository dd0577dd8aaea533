//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSessionStorage`] - JSON-file session storage
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod file_storage;
pub mod mock;
pub mod reqwest_http;

pub use file_storage::{FileSessionStorage, STORAGE_DIR, STORAGE_FILE};
pub use mock::{InMemoryStorage, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
