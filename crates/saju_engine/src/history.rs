//! Bounded reading history behind a pluggable key-value storage.
//!
//! The whole history is one JSON blob `{"history": [...]}` under the key
//! [`STORAGE_KEY`], newest first. Storage or parse failures never reach the
//! caller: they are logged and the operation degrades to a no-op (reads
//! see an empty history).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StorageError;
use crate::input::BirthInput;
use crate::result::SajuResult;

/// Key the history blob is stored under.
pub const STORAGE_KEY: &str = "saju-storage";

/// Largest allowed bound on stored readings.
pub const MAX_HISTORY_LIMIT: usize = 50;

/// Default bound on stored readings.
pub const DEFAULT_HISTORY_LIMIT: usize = MAX_HISTORY_LIMIT;

/// String key-value storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One file per key, `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)?) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-process storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// A stored reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReading {
    pub id: Uuid,
    pub name: String,
    pub input: BirthInput,
    pub result: SajuResult,
    pub created_at: DateTime<Utc>,
}

impl SavedReading {
    pub fn new(name: impl Into<String>, input: BirthInput, result: SajuResult) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), input, result, created_at: Utc::now() }
    }
}

#[derive(Default, Serialize, Deserialize)]
struct HistoryBlob {
    history: Vec<SavedReading>,
}

/// Newest-first, bounded reading history.
#[derive(Debug)]
pub struct HistoryStore<S: Storage> {
    storage: S,
    limit: usize,
}

impl<S: Storage> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_limit(storage, DEFAULT_HISTORY_LIMIT)
    }

    /// `limit` is clamped to `1..=MAX_HISTORY_LIMIT`.
    pub fn with_limit(storage: S, limit: usize) -> Self {
        Self { storage, limit: limit.clamp(1, MAX_HISTORY_LIMIT) }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All readings, newest first.
    pub fn list(&self) -> Vec<SavedReading> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "history storage unavailable, reading as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<HistoryBlob>(&raw) {
            Ok(blob) => blob.history,
            Err(e) => {
                warn!(error = %e, "history blob unreadable, reading as empty");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Option<SavedReading> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Record a new reading and return it.
    pub fn add(&mut self, name: impl Into<String>, input: BirthInput, result: SajuResult) -> SavedReading {
        let reading = SavedReading::new(name, input, result);
        self.insert(reading.clone());
        reading
    }

    /// Prepend a reading, dropping the oldest past the limit.
    pub fn insert(&mut self, reading: SavedReading) {
        let mut history = self.list();
        history.insert(0, reading);
        history.truncate(self.limit);
        self.write(history);
    }

    /// Remove a reading. Returns whether it was present.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let mut history = self.list();
        let before = history.len();
        history.retain(|r| r.id != id);
        let removed = history.len() != before;
        if removed {
            self.write(history);
        }
        removed
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove_item(STORAGE_KEY) {
            warn!(error = %e, "failed to clear history storage");
        }
    }

    fn write(&mut self, history: Vec<SavedReading>) {
        let count = history.len();
        let raw = match serde_json::to_string(&HistoryBlob { history }) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to serialize history");
                return;
            }
        };
        match self.storage.set_item(STORAGE_KEY, &raw) {
            Ok(()) => debug!(count, "history saved"),
            Err(e) => warn!(error = %e, "failed to save history, storage may be full"),
        }
    }
}
