//! Persistent key-value store
//!
//! The popup only ever reads from the store. Values come back as a JSON
//! object holding the subset of requested keys that exist; a missing key is
//! simply absent from the map, never an error.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use envjump_core::prelude::*;

/// Key holding the saved UI language (`"en"`, `"es"`, ...)
pub const LANGUAGE_KEY: &str = "lng";

/// Key holding the environment mapping
pub const ENVIRONMENTS_KEY: &str = "environments";

/// Values returned by a store read, keyed by store key
pub type StoreValues = Map<String, Value>;

/// Read access to the persistent store
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Fetch the given keys. Keys with no stored value are omitted.
    async fn get(&self, keys: &[&str]) -> Result<StoreValues>;
}

/// Store backed by a single JSON object document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data dir>/storage.json`
    pub fn in_directory(dir: &Path) -> Self {
        Self::new(dir.join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<StoreValues> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store document at {:?}, treating as empty", self.path);
                return Ok(StoreValues::new());
            }
            Err(e) => {
                return Err(Error::store_read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(StoreValues::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => Err(Error::store_malformed(&self.path)),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, keys: &[&str]) -> Result<StoreValues> {
        let mut document = self.read_document().await?;
        let values: StoreValues = keys
            .iter()
            .filter_map(|key| document.remove(*key).map(|value| (key.to_string(), value)))
            .collect();
        trace!("Store read {:?} -> {} value(s)", keys, values.len());
        Ok(values)
    }
}
