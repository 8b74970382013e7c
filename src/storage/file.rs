use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use colored::Colorize;

use super::{KeyValueStore, StorageError};

/// A JSON object file holding every key. Each mutation rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    eprintln!(
                        "{} ignoring malformed storage file '{}': {e}",
                        "::".yellow(),
                        path.display()
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                eprintln!(
                    "{} ignoring unreadable storage file '{}': {e}",
                    "::".yellow(),
                    path.display()
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StorageError::Encode {
                key: "*".to_string(),
                source,
            }
        })?;
        let tmp = self.path.with_extension("tmp");
        let write_err = |source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        };
        std::fs::write(&tmp, contents).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    // a failed flush restores the previous entry so memory matches disk
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        self.flush().inspect_err(|_| match previous {
            Some(old) => {
                self.entries.insert(key.to_string(), old);
            }
            None => {
                self.entries.remove(key);
            }
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        self.flush().inspect_err(|_| {
            self.entries.insert(key.to_string(), previous);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("storage.json"));
        assert_eq!(store.get("fm_user"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut store = FileStore::open(&path);
        store.set("reviewCount", "3").unwrap();
        store.set("fm_favorites", "[1,4]").unwrap();
        store.remove("fm_favorites").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("reviewCount").as_deref(), Some("3"));
        assert_eq!(reopened.get("fm_favorites"), None);
    }

    #[test]
    fn malformed_file_opens_empty_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("reviewCount"), None);
        store.set("reviewCount", "1").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("reviewCount").as_deref(), Some("1"));
    }

    #[test]
    fn failed_write_leaves_entries_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("storage.json");
        let mut store = FileStore::open(&good);
        store.set("reviewCount", "2").unwrap();
        assert_eq!(store.path(), good.as_path());

        // a regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut broken = FileStore::open(blocker.join("storage.json"));
        assert!(broken.set("reviewCount", "1").is_err());
        assert_eq!(broken.get("reviewCount"), None);

        broken.entries.insert("fm_user".to_string(), "{}".to_string());
        assert!(broken.remove("fm_user").is_err());
        assert_eq!(broken.get("fm_user").as_deref(), Some("{}"));
        assert!(broken.set("fm_user", "[]").is_err());
        assert_eq!(broken.get("fm_user").as_deref(), Some("{}"));
    }
}
