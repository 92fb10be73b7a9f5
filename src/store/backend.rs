//! Persistence port for the stores.
//!
//! The domain and preference stores talk to a string-keyed slot store, not
//! to the filesystem directly, so the core logic is unit-testable without a
//! real backend.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

pub trait StorageBackend {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;
    fn put(&mut self, key: &str, value: Value) -> AppResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &mut B {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: Value) -> AppResult<()> {
        (**self).put(key, value)
    }
}

/// Single JSON object file mapping slot keys to their values.
///
/// Every `put` rewrites the whole file: mutations are rare and small, and a
/// full rewrite keeps the on-disk snapshot identical to memory.
pub struct JsonFileStorage {
    path: PathBuf,
    slots: BTreeMap<String, Value>,
}

impl JsonFileStorage {
    /// Open the store at `path`. A missing file reads as empty; an
    /// unparsable file is discarded with a warning and reinitialized on the
    /// next write, never crashing the application.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = Path::new(path).to_path_buf();

        let slots = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, Value>>(&content) {
                Ok(map) => map,
                Err(e) => {
                    warning(format!(
                        "Data file {} is corrupted ({e}); starting from an empty store",
                        path.display()
                    ));
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, slots })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.slots)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StorageBackend for JsonFileStorage {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.slots.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> AppResult<()> {
        self.slots.insert(key.to_string(), value);
        self.flush()
    }
}

/// In-memory backend for unit tests.
#[derive(Default)]
pub struct MemoryStorage {
    slots: BTreeMap<String, Value>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.slots.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> AppResult<()> {
        self.slots.insert(key.to_string(), value);
        Ok(())
    }
}
