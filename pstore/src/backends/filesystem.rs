use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::backend::KeyValueStore;
use crate::error::StoreError;

pub const STORE_FILE_NAME: &str = "credentials.json";

/// Stores every key in one JSON object under `root/credentials.json`.
#[derive(Debug)]
pub struct FilesystemKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilesystemKeyValueStore {
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|error| {
            StoreError::storage(format!("failed to create store root: {error}"))
        })?;
        Ok(Self {
            path: root.join(STORE_FILE_NAME),
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<Option<Vec<u8>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read(&self.path)
            .map(Some)
            .map_err(|error| StoreError::storage(format!("failed to read store file: {error}")))
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_file()? {
            Some(bytes) => parse_entries(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(|error| {
            StoreError::storage(format!("failed to serialize store file: {error}"))
        })?;
        write_atomic(&self.path, &bytes)
    }

    fn update(
        &self,
        mutate: impl FnOnce(&mut BTreeMap<String, String>) -> bool,
    ) -> Result<(), StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::storage("filesystem store lock poisoned"))?;
        let (mut entries, recovered) = match self.read_file()? {
            None => (BTreeMap::new(), false),
            Some(bytes) => match parse_entries(&bytes) {
                Ok(entries) => (entries, false),
                Err(error) => {
                    tracing::warn!(error = %error, "replacing unreadable store file");
                    (BTreeMap::new(), true)
                }
            },
        };
        if mutate(&mut entries) || recovered {
            self.save_entries(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FilesystemKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::storage("filesystem store lock poisoned"))?;
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.update(|entries| entries.remove(key).is_some())
    }
}

fn parse_entries(bytes: &[u8]) -> Result<BTreeMap<String, String>, StoreError> {
    serde_json::from_slice(bytes)
        .map_err(|error| StoreError::storage(format!("failed to deserialize store file: {error}")))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let Some(parent) = path.parent() else {
        return Err(StoreError::storage("store file missing parent directory"));
    };
    fs::create_dir_all(parent).map_err(|error| {
        StoreError::storage(format!("failed to create parent directory: {error}"))
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).map_err(|error| {
        StoreError::storage(format!("failed to write temporary store file: {error}"))
    })?;

    if path.exists() {
        fs::remove_file(path).map_err(|error| {
            StoreError::storage(format!("failed to replace existing store file: {error}"))
        })?;
    }
    fs::rename(&tmp, path)
        .map_err(|error| StoreError::storage(format!("failed to finalize store file: {error}")))
}
