//! Key-value scratch storage on disk
//!
//! A single JSON object of string keys to string values, stored at
//! `<storage_dir>/session.json`. Writes replace the whole file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{HuidongError, Result};

/// Scratch file name inside the storage directory
pub const SCRATCH_FILE: &str = "session.json";

/// Scratch store backed by one JSON file
#[derive(Debug, Clone)]
pub struct ScratchStore {
    storage_dir: PathBuf,
}

impl ScratchStore {
    /// Create a store rooted at `storage_dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }

    /// Path of the scratch file
    pub fn path(&self) -> PathBuf {
        self.storage_dir.join(SCRATCH_FILE)
    }

    /// Get storage directory
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Read every entry; a missing file is an empty store
    pub fn load_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&path)?;

        let entries: BTreeMap<String, String> = serde_json::from_str(&json).map_err(|e| {
            HuidongError::StorageError(format!("corrupt scratch file {}: {}", path.display(), e))
        })?;

        Ok(entries)
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_all()?.remove(key))
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    /// Drop `key` if present
    pub fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    /// Delete the scratch file; returns whether anything was removed
    pub fn clear(&self) -> Result<bool> {
        let path = self.path();
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        fs::create_dir_all(&self.storage_dir)?;

        let json = serde_json::to_string_pretty(entries)?;

        fs::write(self.path(), json)?;

        tracing::trace!(path = %self.path().display(), entries = entries.len(), "wrote scratch store");
        Ok(())
    }
}
