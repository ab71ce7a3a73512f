//! Raw key-value backends.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::CacheError;

/// A string-valued key-value store.
pub trait KvStore: Send + Sync {
    /// Get the raw value under a key.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Set the raw value under a key.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// List all keys.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// In-process store, used for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> T,
    ) -> Result<T, CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::StoreError("memory store lock poisoned".to_string()))?;
        Ok(f(&mut entries))
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.with_entries(|entries| entries.keys().cloned().collect())
    }
}

/// Store persisted as a single JSON object file, one entry per key.
///
/// Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(CacheError::Io(e)),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        tracing::trace!(path = %self.path.display(), keys = entries.len(), "storage file written");
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), CacheError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| CacheError::StoreError("file store lock poisoned".to_string()))?;
        let mut entries = self.read_entries()?;
        f(&mut entries);
        self.write_entries(&entries)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.read_entries()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("shopfront-cache-{}-{}", name, std::process::id()))
            .join("storage.json")
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        assert!(store.exists("cart").unwrap());

        store.delete("cart").unwrap();
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = scratch_path("persist");
        let _ = fs::remove_file(&path);

        FileStore::new(&path).set("cart", "[1]").unwrap();
        FileStore::new(&path).set("orders", "[]").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("[1]"));
        assert_eq!(reopened.keys().unwrap(), vec!["cart", "orders"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_shared_store_sees_writes() {
        let store = Arc::new(MemoryStore::new());
        let other = Arc::clone(&store);

        other.set("orders", "[]").unwrap();
        assert_eq!(store.get("orders").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = FileStore::new(scratch_path("missing"));
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileStore::new(&path).get("cart"),
            Err(CacheError::SerializeError(_))
        ));

        let _ = fs::remove_file(&path);
    }
}
