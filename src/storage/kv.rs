//! Key-value persistence used by the client state stores
//!
//! [`KeyValueStore`] is the device-local storage collaborator: string keys,
//! string values, three operations. Every failure is returned to the caller
//! as a [`PocketError::Storage`] so a store can tell "nothing saved" apart
//! from "could not read".

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{PocketError, PocketResult};

use super::file_io::{read_json, write_json_atomic};

/// Key under which the signed-in user is stored
pub const KEY_USER: &str = "@pocketbook:user";
/// Key for the display language
pub const KEY_LANGUAGE: &str = "@pocketbook:language";
/// Key for the color theme
pub const KEY_THEME: &str = "@pocketbook:theme";
/// Key for the hide-values toggle
pub const KEY_HIDE_VALUES: &str = "@pocketbook:hide_values";

/// String key-value storage
///
/// Methods take `&self`; implementations use interior mutability.
pub trait KeyValueStore: Debug {
    /// Read a value, `Ok(None)` if the key was never set
    fn get(&self, key: &str) -> PocketResult<Option<String>>;

    /// Store a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> PocketResult<()>;

    /// Delete a key; removing a missing key is not an error
    fn remove(&self, key: &str) -> PocketResult<()>;
}

fn lock_error(e: impl std::fmt::Display) -> PocketError {
    PocketError::Storage(format!("Failed to acquire lock: {}", e))
}

/// In-memory store, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PocketResult<Option<String>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PocketResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PocketResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The file is read on every access and rewritten atomically on every
/// change, so readers always see the latest complete write. Updates are
/// read-modify-write guarded only within this process: at most one process
/// may write to a given file at a time.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: RwLock<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> PocketResult<BTreeMap<String, String>> {
        read_json(&self.path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> PocketResult<Option<String>> {
        let _guard = self.write_lock.read().map_err(lock_error)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> PocketResult<()> {
        let _guard = self.write_lock.write().map_err(lock_error)?;
        let mut data = self.read_all()?;
        data.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &data)
    }

    fn remove(&self, key: &str) -> PocketResult<()> {
        let _guard = self.write_lock.write().map_err(lock_error)?;
        let mut data = self.read_all()?;
        if data.remove(key).is_some() {
            write_json_atomic(&self.path, &data)?;
        }
        Ok(())
    }
}
