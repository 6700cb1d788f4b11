// Gitfolio local store
// Persisted string key-value storage for client-side state: the chosen
// identity and the bookmarked project ids. Stored as a single JSON object
// file at the platform-specific config path.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::platform;
use crate::types::errors::StoreError;

const STORE_FILE: &str = "store.json";

/// Trait defining the persisted key-value store interface.
///
/// Injected into the view session so the pure aggregation/query logic
/// stays free of storage concerns.
pub trait LocalStoreTrait {
    fn get(&self, key: &str) -> Option<String>;
    /// Sets a value and writes the store file before returning.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removes a value and writes the store file before returning.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Key-value store persisted as a JSON object file.
///
/// An absent or malformed file loads as an empty map; corrupt persisted
/// state is recovered silently, never propagated as an error.
pub struct LocalStore {
    file_path: Option<PathBuf>,
    entries: Mutex<HashMap<String, String>>,
}

impl LocalStore {
    /// Opens the store backed by the given file, or by
    /// `<config dir>/store.json` when no override is provided.
    pub fn open(path_override: Option<String>) -> Self {
        let file_path = match path_override {
            Some(p) => PathBuf::from(p),
            None => platform::get_config_dir().join(STORE_FILE),
        };
        let entries = Self::load_entries(&file_path);
        Self {
            file_path: Some(file_path),
            entries: Mutex::new(entries),
        }
    }

    /// Opens a store with no backing file. Writes are kept in memory only.
    ///
    /// Useful for testing — the contents are discarded on drop.
    pub fn open_in_memory() -> Self {
        Self {
            file_path: None,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the backing file path, if the store has one.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn load_entries(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "store file unreadable, starting empty");
                return HashMap::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "store file malformed, starting empty");
                HashMap::new()
            }
        }
    }

    /// Writes the full entry map to the backing file, creating parent
    /// directories if needed. A no-op for in-memory stores.
    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let path = match &self.file_path {
            Some(path) => path,
            None => return Ok(()),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::IoError(format!("Failed to create store directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| {
            StoreError::SerializationError(format!("Failed to serialize store: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| StoreError::IoError(format!("Failed to write store file: {}", e)))?;

        Ok(())
    }
}

impl LocalStoreTrait for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries)
    }
}
