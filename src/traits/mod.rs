//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE, multipart)
//! - [`SessionStorage`] - Durable key-value storage for the session

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, MultipartFile, Response};
pub use storage::SessionStorage;
