/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Persistent key-value store holding the credentials written by the login flow.
//!
//! The request path only ever calls [`TokenStore::get`]. [`FileTokenStore`]
//! answers it from memory after a metadata check of the backing file; the
//! file body is re-read only when its modification time or length changed.

use crate::error::AppError;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Read access to a string key-value store
pub trait TokenStore: Send + Sync {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store, for tests and for embedding applications that keep
/// credentials elsewhere
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    /// Inserts or replaces the value under `key`
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        write_lock(&self.entries).insert(key.into(), value.into());
    }

    /// Removes the value under `key`
    pub fn remove(&self, key: &str) {
        write_lock(&self.entries).remove(key);
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("keys", &sorted_keys(&read_lock(&self.entries)))
            .finish()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        read_lock(&self.entries).get(key).cloned()
    }
}

/// Modification time and length of the backing file; `None` when it is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl FileStamp {
    fn of(path: &Path) -> Option<Self> {
        fs::metadata(path).ok().map(|m| Self {
            modified: m.modified().ok(),
            len: m.len(),
        })
    }
}

#[derive(Default)]
struct Snapshot {
    entries: HashMap<String, String>,
    stamp: Option<FileStamp>,
}

/// Store persisted as a flat JSON object of strings, e.g. `{"token": "abc"}`
///
/// Values written to the file by another handle or process are picked up by
/// the next `get`.
pub struct FileTokenStore {
    path: PathBuf,
    state: RwLock<Snapshot>,
}

impl FileTokenStore {
    /// Opens the store at `path`
    ///
    /// A missing file is treated as an empty store; it is created on the first `set`.
    ///
    /// # Errors
    /// * `AppError::Io` if the file exists but cannot be read
    /// * `AppError::Storage` if the file is not a JSON object of strings
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let stamp = FileStamp::of(&path);
        let entries = read_entries(&path)?;
        debug!(
            "Opened token store at {} ({} entries)",
            path.display(),
            entries.len()
        );
        Ok(Self {
            path,
            state: RwLock::new(Snapshot { entries, stamp }),
        })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the backing file unconditionally
    pub fn reload(&self) -> Result<(), AppError> {
        let stamp = FileStamp::of(&self.path);
        let entries = read_entries(&self.path)?;
        *write_lock(&self.state) = Snapshot { entries, stamp };
        Ok(())
    }

    /// Inserts or replaces the value under `key` and persists the store
    pub fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    /// Removes the value under `key` and persists the store
    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn update<F: FnOnce(&mut HashMap<String, String>)>(&self, f: F) -> Result<(), AppError> {
        self.refresh_if_changed();
        let mut state = write_lock(&self.state);
        let mut next = state.entries.clone();
        f(&mut next);
        write_entries(&self.path, &next)?;
        state.entries = next;
        state.stamp = FileStamp::of(&self.path);
        Ok(())
    }

    fn refresh_if_changed(&self) {
        let current = FileStamp::of(&self.path);
        if read_lock(&self.state).stamp == current {
            return;
        }
        debug!("Token store {} changed on disk, reloading", self.path.display());
        if let Err(e) = self.reload() {
            warn!(
                "Failed to reload token store {}, keeping previous values: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl fmt::Debug for FileTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTokenStore")
            .field("path", &self.path)
            .field("keys", &sorted_keys(&read_lock(&self.state).entries))
            .finish()
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.refresh_if_changed();
        read_lock(&self.state).entries.get(key).cloned()
    }
}

// A panic while holding the lock cannot leave a half-written map behind:
// every writer replaces or inserts whole values.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

// Values are secrets; only keys are ever printed.
fn sorted_keys(entries: &HashMap<String, String>) -> Vec<String> {
    let mut keys: Vec<String> = entries.keys().cloned().collect();
    keys.sort();
    keys
}

fn read_entries(path: &Path) -> Result<HashMap<String, String>, AppError> {
    if !path.exists() {
        warn!("Token store {} does not exist yet", path.display());
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }
    serde_json::from_str(&content)
        .map_err(|e| AppError::Storage(format!("invalid token store {}: {e}", path.display())))
}

fn write_entries(path: &Path, entries: &HashMap<String, String>) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(entries)?;
    fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
