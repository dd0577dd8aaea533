//! File-based session storage adapter.
//!
//! All keys live in a single JSON object file, `session.json`, inside the
//! storage directory (by default `~/.zoneblog`).

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::traits::SessionStorage;

/// The default storage directory name under the home directory.
pub const STORAGE_DIR: &str = ".zoneblog";

/// The storage file name.
pub const STORAGE_FILE: &str = "session.json";

/// File-based session storage.
///
/// Every `set`/`remove` rewrites the whole file; the file only ever holds a
/// token and a user record.
///
/// # Example
///
/// ```ignore
/// use zoneblog::adapters::FileSessionStorage;
/// use zoneblog::traits::SessionStorage;
///
/// let storage = FileSessionStorage::new()?;
/// storage.set("auth_token", "eyJhbGciOi...")?;
/// assert_eq!(storage.get("auth_token")?.as_deref(), Some("eyJhbGciOi..."));
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Create storage at `~/.zoneblog/session.json`.
    pub fn new() -> Result<Self, StorageError> {
        let home = dirs::home_dir().ok_or(StorageError::NoHomeDirectory)?;
        Ok(Self::in_dir(home.join(STORAGE_DIR)))
    }

    /// Create storage in a specific directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE),
        }
    }

    /// Get the path to the storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Load every entry.
    ///
    /// A missing file is an empty store. A corrupt file is also treated as
    /// empty so that a bad write never locks the user out.
    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                Ok(BTreeMap::new())
            }
        }
    }

    /// Sibling file the next write goes to before it replaces the real one.
    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Persist every entry, creating the parent directory if needed.
    ///
    /// The entries are written to a temporary file and renamed over the
    /// storage file, so a reader sees either the old or the new contents.
    fn store(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let temp_path = self.temp_path();
        let file = File::create(&temp_path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries).map_err(|source| {
            StorageError::Serialization {
                key: STORAGE_FILE.to_string(),
                source,
            }
        })?;
        writer.flush().map_err(|e| self.io_error(e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| self.io_error(e))?;
        drop(writer);

        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(self.io_error(e)),
            };
        }
        self.store(&entries)
    }
}
