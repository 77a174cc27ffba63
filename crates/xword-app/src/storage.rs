//! Key-value persistence store
//!
//! A small string-to-string store standing in for browser local storage.
//! [`FileStore`] keeps the whole map in one JSON file; [`MemoryStore`] is used
//! when persistence is disabled in tests.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use xword_core::prelude::*;

use crate::config::StorageSettings;

const STORE_FILENAME: &str = "store.json";

/// String key-value store with last-writer-wins semantics
pub trait KeyValueStore: std::fmt::Debug + Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

/// JSON-object file store. Reads are served from an in-memory copy; every
/// write rewrites the file under an exclusive lock.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store. A corrupt file is logged and treated
    /// as empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::persistence_unavailable(format!(
                        "cannot create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt store {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(Error::persistence_unavailable(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        debug!("Opened store {:?} with {} key(s)", path, values.len());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.values)?;

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::persistence_unavailable(format!("cannot open store: {}", e)))?;

        file.lock_exclusive()
            .map_err(|e| Error::persistence_unavailable(format!("cannot lock store: {}", e)))?;

        let mut file = file;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        // Lock is released when the file is dropped
        trace!("Flushed {} key(s) to {:?}", self.values.len(), self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Default store location: `~/.local/share/xword/store.json`
pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("xword").join(STORE_FILENAME))
}

/// Open the store described by the settings.
///
/// Returns `None` when persistence is disabled or unavailable; callers keep
/// running purely in memory in that case.
pub fn open_store(settings: &StorageSettings) -> Option<Box<dyn KeyValueStore>> {
    if !settings.enabled {
        info!("Persistence disabled by configuration");
        return None;
    }

    let Some(path) = settings.path.clone().or_else(default_store_path) else {
        warn!(
            "{}",
            Error::persistence_unavailable("no data directory for this platform")
        );
        return None;
    };

    match FileStore::open(path) {
        Ok(store) => {
            info!("Persisting progress to {}", store.path().display());
            Some(Box::new(store))
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("timer-a"), None);

        store.set("timer-a", "12").unwrap();
        assert_eq!(store.get("timer-a").as_deref(), Some("12"));

        store.remove("timer-a").unwrap();
        assert_eq!(store.get("timer-a"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("timer-cpu", "42").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("timer-cpu").as_deref(), Some("42"));
    }

    #[test]
    fn test_file_store_last_write_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("timer-cpu", "1").unwrap();
        store.set("timer-cpu", "2").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"timer-cpu\": \"2\""));
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "this is not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("timer-cpu"), None);

        store.set("timer-cpu", "7").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("timer-cpu").as_deref(), Some("7"));
    }

    #[test]
    fn test_open_store_disabled() {
        let settings = StorageSettings {
            enabled: false,
            path: None,
        };
        assert!(open_store(&settings).is_none());
    }

    #[test]
    fn test_open_store_with_explicit_path() {
        let dir = tempdir().unwrap();
        let settings = StorageSettings {
            enabled: true,
            path: Some(dir.path().join("custom.json")),
        };
        let mut store = open_store(&settings).unwrap();
        store.set("k", "v").unwrap();
        assert!(dir.path().join("custom.json").exists());
    }
}
