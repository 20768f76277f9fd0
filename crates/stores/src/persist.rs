//! The persistence boundary.
//!
//! Stores do not touch the filesystem directly; they speak to a
//! [`StateStorage`] backend through a pure encode/decode pair. One logical
//! key maps to one JSON document. Swapping the backend (file system in the
//! binary, in-memory in tests) never changes what is written.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{Result, StorageError};

/// Key/value storage for persisted store snapshots.
pub trait StateStorage: Send + Sync {
    /// Read the raw document for `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw document for `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// Encode / decode
// =============================================================================

/// Encode a snapshot to its persisted JSON form.
pub fn encode<T: Serialize>(key: &str, snapshot: &T) -> Result<String> {
    serde_json::to_string(snapshot).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })
}

/// Decode a persisted JSON document back into a snapshot.
///
/// Returns `None` for corrupt documents: persisted state is a convenience,
/// not a source of truth, so a bad snapshot degrades to defaults.
pub fn decode<T: DeserializeOwned>(key: &str, document: &str) -> Option<T> {
    match serde_json::from_str(document) {
        Ok(snapshot) => Some(snapshot),
        Err(error) => {
            warn!(%key, %error, "discarding corrupt persisted state");
            None
        }
    }
}

/// Load and decode the snapshot under `key`, degrading to `None` when the
/// key is absent, unreadable, or corrupt.
pub fn load_snapshot<T: DeserializeOwned>(storage: &dyn StateStorage, key: &str) -> Option<T> {
    match storage.load(key) {
        Ok(Some(document)) => decode(key, &document),
        Ok(None) => None,
        Err(error) => {
            warn!(%key, %error, "failed to read persisted state");
            None
        }
    }
}

/// Encode and write the snapshot under `key`.
pub fn save_snapshot<T: Serialize>(
    storage: &dyn StateStorage,
    key: &str,
    snapshot: &T,
) -> Result<()> {
    let document = encode(key, snapshot)?;
    storage.save(key, &document)
}

// =============================================================================
// Backends
// =============================================================================

/// File-system backend: one `<key>.json` file per key inside a data
/// directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StateStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(document) => Ok(Some(document)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let io = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(io)?;
        std::fs::write(self.path_for(key), value).map_err(io)
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
