//! JSON file backed registry.

use hbnb_model::Record;
use hbnb_types::RecordKey;
use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{Registry, Storage, StorageError, StorageResult};

/// Where the console keeps its records unless told otherwise.
pub const DEFAULT_FILE_PATH: &str = "file.json";

/// Registry persisted as one JSON object of `ClassName.id` → record dictionary.
///
/// Every flush rewrites the whole file. The new content is written to a
/// sibling temp file first and renamed over the target, so a failed flush
/// leaves the previous file intact.
#[derive(Debug, Default)]
pub struct FileStorage {
    path: Option<PathBuf>,
    objects: Registry,
}

impl FileStorage {
    /// Opens the store at `path`, loading any records already there.
    ///
    /// A missing file is not an error: the store starts empty and the file
    /// is created on the first flush.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let mut store = Self {
            path: Some(path.into()),
            objects: Registry::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Creates a store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replaces the in-memory registry with the file's content.
    pub fn reload(&mut self) -> StorageResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No storage file yet, starting empty");
                self.objects.clear();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let raw: IndexMap<String, Record> = serde_json::from_str(&text)?;
        let mut objects = Registry::with_capacity(raw.len());
        for (key, record) in raw {
            let key = RecordKey::parse(&key)
                .map_err(|e| StorageError::InvalidData(e.to_string()))?;
            if record.key() != key {
                return Err(StorageError::InvalidData(format!(
                    "record {} stored under key {}",
                    record.key(),
                    key
                )));
            }
            objects.insert(key, record);
        }

        info!(path = %path.display(), records = objects.len(), "Loaded records");
        self.objects = objects;
        Ok(())
    }

    fn write_file(&self, path: &Path) -> StorageResult<()> {
        let dump: IndexMap<String, &Record> = self
            .objects
            .iter()
            .map(|(key, record)| (key.to_string(), record))
            .collect();
        let json = serde_json::to_string_pretty(&dump)?;

        let tmp_path = path.with_extension(
            path.extension()
                .map(|ext| format!("{}.tmp", ext.to_string_lossy()))
                .unwrap_or_else(|| "tmp".to_string()),
        );
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn all(&self) -> &Registry {
        &self.objects
    }

    fn insert(&mut self, record: Record) {
        debug!(key = %record.key(), "Registering record");
        self.objects.insert(record.key(), record);
    }

    fn delete(&mut self, key: &RecordKey) -> Option<Record> {
        // shift_remove keeps the remaining records in insertion order
        let removed = self.objects.shift_remove(key);
        debug!(key = %key, found = removed.is_some(), "Deleting record");
        removed
    }

    fn update(&mut self, key: &RecordKey, attr: &str, value: &str) -> StorageResult<()> {
        let record = self
            .objects
            .get_mut(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        if !record.set(attr, value) {
            debug!(key = %key, attr, "Ignoring update of reserved attribute");
        }
        Ok(())
    }

    fn save(&mut self) -> StorageResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        self.write_file(path)?;
        debug!(path = %path.display(), records = self.objects.len(), "Flushed registry");
        Ok(())
    }

    fn save_record(&mut self, key: &RecordKey) -> StorageResult<()> {
        self.objects
            .get_mut(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?
            .touch();
        self.save()
    }
}
