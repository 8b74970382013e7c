//! Key-value storage standing in for the browser's local storage.
//!
//! Values are plain strings; callers decide how to encode them. Reads never
//! fail: anything unreadable is reported as absent.

pub mod file;

use std::collections::BTreeMap;

use thiserror::Error;

pub use file::FileStore;

pub const STORAGE_USER: &str = "fm_user";
pub const STORAGE_FAVORITES: &str = "fm_favorites";
pub const STORAGE_REVIEW_COUNT: &str = "reviewCount";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create storage directory: {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write storage file: {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads a JSON value, treating absent or malformed data as `None`.
pub fn get_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn set_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: serde::Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
        store.remove("k").unwrap();
        assert!(store.is_empty());
        // removing an absent key is a no-op
        store.remove("k").unwrap();
    }

    #[test]
    fn get_json_treats_malformed_as_absent() {
        let mut store = MemoryStore::new();
        store.set("list", "[1, 2").unwrap();
        assert_eq!(get_json::<Vec<u32>, _>(&store, "list"), None);
        store.set("list", "[1,2]").unwrap();
        assert_eq!(get_json::<Vec<u32>, _>(&store, "list"), Some(vec![1, 2]));
    }

    #[test]
    fn set_json_writes_compact_json() {
        let mut store = MemoryStore::new();
        set_json(&mut store, "list", &vec![3u32, 1]).unwrap();
        assert_eq!(store.get("list").as_deref(), Some("[3,1]"));
    }
}
