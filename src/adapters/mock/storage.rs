//! In-memory session storage for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::SessionStorage;

/// In-memory session storage for testing.
///
/// Clones share the same map, so a test can keep one handle to inspect what
/// the session store wrote through another.
///
/// # Example
///
/// ```ignore
/// use zoneblog::adapters::mock::InMemoryStorage;
/// use zoneblog::traits::SessionStorage;
///
/// let storage = InMemoryStorage::new();
/// assert!(storage.get("auth_token")?.is_none());
/// storage.set("auth_token", "tok")?;
/// assert_eq!(storage.snapshot().get("auth_token").map(String::as_str), Some("tok"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    write_should_fail: Arc<Mutex<bool>>,
    read_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        {
            let mut map = storage.entries.lock().unwrap();
            for (key, value) in entries {
                map.insert(key.to_string(), value.to_string());
            }
        }
        storage
    }

    /// Configure whether set/remove should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether get should fail.
    pub fn set_read_should_fail(&self, should_fail: bool) {
        *self.read_should_fail.lock().unwrap() = should_fail;
    }

    /// Copy of every stored entry.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.lock().unwrap().clone()
    }
}

impl SessionStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.read_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock read failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.write_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock write failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if *self.write_should_fail.lock().unwrap() {
            return Err(StorageError::Other("Mock write failure".to_string()));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
