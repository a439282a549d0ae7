//! Key-value backends for the history store.

use super::error::StoreError;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tempfile::NamedTempFile;

/// Durable storage addressed by slot name.
///
/// A write replaces the whole slot. Implementations must never expose a
/// partially written value to a later `read`.
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace a slot's contents.
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Delete a slot. Removing a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process backend.
///
/// Clones share the same map, so a test can hand one clone to a store and
/// inspect the slots through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the slots written so far, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned map is still a consistent map: every write is a single insert.
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// One file per slot inside a directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the slot file, so readers see either the old or the new contents.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Backend rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend in the platform's per-user data directory, if one exists.
    pub fn default_location() -> Option<Self> {
        directories::ProjectDirs::from("com", "namecloak", "namecloak")
            .map(|dirs| Self::new(dirs.data_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that backs `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.slot")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(bytes)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
