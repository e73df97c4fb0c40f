use crate::state::selection::{SelectionDelta, SelectionSet};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracker_api::endpoints::TransactionId;

/// Key the selected ids are stored under
pub const SELECTION_KEY: &str = "selectedTransactions";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value store that survives restarts
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Parse a stored selection. Anything but a JSON array of integers is an error.
pub fn parse_selection(raw: &str) -> Result<SelectionSet, StorageError> {
    let ids: Vec<TransactionId> = serde_json::from_str(raw)?;
    Ok(ids.into_iter().collect())
}

/// Load the stored selection, falling back to an empty set when the entry is
/// missing, unreadable or corrupt.
pub fn load_selection<S: KeyValueStore + ?Sized>(store: &S) -> SelectionSet {
    let raw = match store.get(SELECTION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SelectionSet::new(),
        Err(e) => {
            tracing::warn!("Could not read stored selection, starting empty: {}", e);
            return SelectionSet::new();
        }
    };

    match parse_selection(&raw) {
        Ok(selection) => {
            tracing::debug!("Loaded {} selected transactions", selection.len());
            selection
        }
        Err(e) => {
            tracing::warn!("Discarding corrupt stored selection: {}", e);
            SelectionSet::new()
        }
    }
}

/// Write the full selection as a JSON array
pub fn persist_selection<S: KeyValueStore + ?Sized>(
    store: &S,
    selection: &SelectionSet,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(&selection.ids())?;
    store.set(SELECTION_KEY, &json)
}

/// Read the stored snapshot, replay `delta` on it and write the whole array
/// back. Returns the snapshot that was written.
///
/// A failed read aborts without writing; only corrupt data starts over empty.
pub fn commit_delta<S: KeyValueStore + ?Sized>(
    store: &S,
    delta: &SelectionDelta,
) -> Result<SelectionSet, StorageError> {
    let mut snapshot = match store.get(SELECTION_KEY)? {
        Some(raw) => parse_selection(&raw).unwrap_or_else(|e| {
            tracing::warn!("Replacing corrupt stored selection: {}", e);
            SelectionSet::new()
        }),
        None => SelectionSet::new(),
    };
    snapshot.apply(delta);
    persist_selection(store, &snapshot)?;
    Ok(snapshot)
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn default_dir() -> Result<PathBuf, StorageError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StorageError::Unavailable("no data directory".to_string()))?;
        Ok(data_dir.join("tracker-select"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Readers never observe a partially written file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
