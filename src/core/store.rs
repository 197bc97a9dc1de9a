//! Key-value storage for whole-collection persistence
//!
//! Each collection lives under one key as a JSON array and is always read and
//! written as a whole. A missing key reads as an empty collection.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::entity::Entity;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored collection '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored collection '{key}' holds a record of another type: {id}")]
    ForeignRecord { key: String, id: String },

    #[error("Failed to serialize collection '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-valued key-value store
pub trait Store {
    /// Read the raw value for a key, `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value for a key
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Load a whole collection, empty when the key is absent
///
/// Every record's ID must carry the collection's prefix.
pub fn load_collection<T: Entity>(store: &dyn Store) -> Result<Vec<T>, StoreError> {
    let Some(raw) = store.get(T::COLLECTION)? else {
        return Ok(Vec::new());
    };
    let items: Vec<T> = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
        key: T::COLLECTION.to_string(),
        source,
    })?;

    if let Some(foreign) = items.iter().find(|item| item.id().prefix() != T::PREFIX) {
        return Err(StoreError::ForeignRecord {
            key: T::COLLECTION.to_string(),
            id: foreign.id().to_string(),
        });
    }
    Ok(items)
}

/// Serialize and write a whole collection
pub fn save_collection<T: Entity>(store: &mut dyn Store, items: &[T]) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(items).map_err(|source| StoreError::Serialize {
        key: T::COLLECTION.to_string(),
        source,
    })?;
    trace!(key = T::COLLECTION, count = items.len(), "saving collection");
    store.set(T::COLLECTION, &raw)
}

/// Write an empty collection if the key has never been written
pub fn init_collection<T: Entity>(store: &mut dyn Store) -> Result<bool, StoreError> {
    if store.get(T::COLLECTION)?.is_some() {
        return Ok(false);
    }
    save_collection::<T>(store, &[])?;
    Ok(true)
}

/// In-memory store, for tests and throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        // Write-then-rename so a crash never leaves a half-written collection
        fs::write(&tmp, value).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), bytes = value.len(), "wrote collection");
        Ok(())
    }
}
