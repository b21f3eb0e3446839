//! Persistent JSON document store.
//!
//! Each document lives in a named slot (a file) inside the application's
//! private data directory. Loads never fail the caller: a missing or
//! unreadable slot yields the caller's default. Saves are best-effort and
//! report failure through the log and a `bool`; `try_save` is there for
//! callers that want the error.

use crate::utils::fs::{remove_if_exists, write_atomic};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Slot holding the verbatim remote catalog.
pub const CATALOG_CACHE_SLOT: &str = "movies_cache.json";
/// Slot holding the user profile.
pub const PROFILE_SLOT: &str = "user_profile.json";
/// Slot holding the app settings.
pub const SETTINGS_SLOT: &str = "app_settings.json";

/// File-backed store for JSON documents.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a slot.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(slot)
    }

    /// Whether a slot currently holds a document.
    pub fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).is_file()
    }

    /// Read the raw text of a slot, `None` if absent.
    pub fn read_raw(&self, slot: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the raw text of a slot.
    pub fn write_raw(&self, slot: &str, content: &str) -> Result<()> {
        write_atomic(&self.slot_path(slot), content.as_bytes())
    }

    /// Parse a slot, `None` if absent.
    pub fn try_load<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>> {
        match self.read_raw(slot)? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    /// Parse a slot, falling back to `default` when it is absent or broken.
    pub fn load_or<T: DeserializeOwned>(&self, slot: &str, default: T) -> T {
        match self.try_load(slot) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!("Slot {} not found, using default", slot);
                default
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}. Using default", slot, e);
                default
            }
        }
    }

    /// Parse a slot, falling back to `T::default()`.
    pub fn load<T: DeserializeOwned + Default>(&self, slot: &str) -> T {
        self.load_or(slot, T::default())
    }

    /// Serialize `value` into a slot.
    pub fn try_save<T: Serialize + ?Sized>(&self, slot: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.write_raw(slot, &json)?;
        tracing::debug!("Saved {} ({} bytes)", slot, json.len());
        Ok(())
    }

    /// Best-effort save. Failures are logged; returns whether it succeeded.
    pub fn save<T: Serialize + ?Sized>(&self, slot: &str, value: &T) -> bool {
        match self.try_save(slot, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", slot, e);
                false
            }
        }
    }

    /// Delete a slot. Absence is not an error; returns whether a document
    /// was removed.
    pub fn remove(&self, slot: &str) -> Result<bool> {
        remove_if_exists(&self.slot_path(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_raw_missing_slot() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::new(temp_dir.path());
        assert!(store.read_raw("nothing.json").unwrap().is_none());
        assert!(!store.exists("nothing.json"));
    }

    #[test]
    fn test_load_or_uses_caller_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::new(temp_dir.path());
        let value: Vec<u32> = store.load_or("numbers.json", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_save_into_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::new(temp_dir.path().join("fresh"));
        assert!(store.save("numbers.json", &vec![1, 2, 3]));
        let loaded: Vec<u32> = store.load("numbers.json");
        assert_eq!(loaded, vec![1, 2, 3]);
    }
}
