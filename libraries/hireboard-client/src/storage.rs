//! Token persistence.
//!
//! [`TokenStore`] keeps the access/refresh pair under two fixed keys in any
//! [`KeyValueStorage`]. Two backends ship with the crate: [`MemoryStorage`]
//! for tests and short-lived tools, and [`FileStorage`], a JSON file that
//! survives restarts.

use hireboard_core::{CoreError, KeyValueStorage, TokenPair};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

fn lock(values: &Mutex<HashMap<String, String>>) -> MutexGuard<'_, HashMap<String, String>> {
    values.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process key/value storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> hireboard_core::Result<()> {
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> hireboard_core::Result<()> {
        lock(&self.values).remove(key);
        Ok(())
    }
}

/// Key/value storage backed by a JSON object in a file.
///
/// The file is read once on open and rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the storage file at `path`
    pub fn open(path: impl AsRef<Path>) -> hireboard_core::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            HashMap::new()
        };

        debug!(path = %path.display(), keys = values.len(), "Opened token file");

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &HashMap<String, String>) -> hireboard_core::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Replaced atomically through a sibling temp file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(values)?)?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| CoreError::storage(format!("{}: {e}", self.path.display())))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> hireboard_core::Result<()> {
        let mut values = lock(&self.values);
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }

    fn remove(&self, key: &str) -> hireboard_core::Result<()> {
        let mut values = lock(&self.values);
        if values.remove(key).is_some() {
            self.flush(&values)?;
        }
        Ok(())
    }
}

/// Access/refresh token persistence under fixed keys.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Token store backed by fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// The persisted access token, if any
    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY)
    }

    /// The persisted refresh token, if any
    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    /// Persist both tokens
    pub fn save(&self, tokens: &TokenPair) -> hireboard_core::Result<()> {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access)?;
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh)
    }

    /// Remove both tokens
    pub fn clear(&self) -> hireboard_core::Result<()> {
        self.storage.remove(ACCESS_TOKEN_KEY)?;
        self.storage.remove(REFRESH_TOKEN_KEY)
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_access_token", &self.access_token().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access: access.to_string(),
            refresh: refresh.to_string(),
        }
    }

    #[test]
    fn test_memory_token_roundtrip() {
        let store = TokenStore::in_memory();
        assert!(store.access_token().is_none());

        store.save(&pair("abc", "xyz")).unwrap();
        assert_eq!(store.access_token().as_deref(), Some("abc"));
        assert_eq!(store.refresh_token().as_deref(), Some("xyz"));

        store.clear().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = TokenStore::in_memory();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session").join("tokens.json");

        {
            let store = TokenStore::new(Arc::new(FileStorage::open(&path).unwrap()));
            store.save(&pair("abc", "xyz")).unwrap();
        }

        let reopened = TokenStore::new(Arc::new(FileStorage::open(&path).unwrap()));
        assert_eq!(reopened.access_token().as_deref(), Some("abc"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("xyz"));

        reopened.clear().unwrap();
        let again = FileStorage::open(&path).unwrap();
        assert!(again.get(ACCESS_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_file_storage_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            FileStorage::open(&path),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_file_storage_empty_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, "").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
    }
}
