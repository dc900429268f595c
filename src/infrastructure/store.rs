//! Key-value persistence provider
//!
//! The journal core talks to storage through [`KeyValueStore`] and is handed
//! an implementation at construction time, so tests can swap in the
//! in-memory store.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Asynchronous-in-spirit, synchronous-in-practice slot storage: one string
/// value per key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the slot was never
    /// written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Replace the slot via a temp file in the same directory, then rename
    /// into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_name = format!("{}.moodlog-tmp-{}", key, std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, value)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-memory store used as a test double for the journal core.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
