//! Key-value persistence port for the session pair
//!
//! The session survives a restart through a small key-value store holding
//! exactly two entries: the bearer token and the serialized user. The port is
//! infallible, mirroring the browser storage it stands in for; file-backed
//! implementations swallow I/O failures.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key for the serialized user
pub const USER_KEY: &str = "user";

/// Persistence port for the session pair
///
/// Only the auth client writes the pair; only the HTTP layer clears it, so
/// credential issuance has a single writer.
pub trait SessionStore: Send + Sync {
    /// Read a value by key
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value by key
    fn set(&self, key: &str, value: &str);

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// In-memory session store
///
/// The default store; sessions last for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// File-backed session store
///
/// Persists the entries as a single JSON document so a session survives
/// process restarts. Write failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a file-backed store, loading any previously persisted entries
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        let result = serde_json::to_string(entries)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            .and_then(|raw| std::fs::write(&self.path, raw));

        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist session");
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.flush(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.set(TOKEN_KEY, "abc");
        assert_eq!(store.get(TOKEN_KEY), Some("abc".to_string()));

        store.remove(TOKEN_KEY);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = FileStore::open(&path);
            store.set(TOKEN_KEY, "persisted-token");
            store.set(USER_KEY, r#"{"id":1}"#);
        }

        let store = FileStore::open(&path);
        assert_eq!(store.get(TOKEN_KEY), Some("persisted-token".to_string()));
        assert_eq!(store.get(USER_KEY), Some(r#"{"id":1}"#.to_string()));

        store.remove(TOKEN_KEY);
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(TOKEN_KEY), None);
        assert_eq!(reopened.get(USER_KEY), Some(r#"{"id":1}"#.to_string()));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get(TOKEN_KEY), None);
    }
}
