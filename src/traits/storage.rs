//! Durable session storage trait abstraction.
//!
//! A small synchronous key-value store, the stand-in for a browser's local
//! storage. Only the session store reads or writes it.

use crate::error::StorageError;

/// Trait for durable key-value storage of session data.
///
/// Access is synchronous so that a write is visible to the very next read.
///
/// # Example
///
/// ```ignore
/// use zoneblog::traits::SessionStorage;
///
/// fn remember_token<S: SessionStorage>(storage: &S, token: &str) -> Result<(), StorageError> {
///     storage.set("auth_token", token)
/// }
/// ```
pub trait SessionStorage: Send + Sync {
    /// Read a value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key is present
    /// - `Ok(None)` if the key is absent
    /// - `Err(error)` if the backing store could not be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
