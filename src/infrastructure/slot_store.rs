// src/infrastructure/slot_store.rs
use crate::application::StorageSlot;
use crate::domain::DomainError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File-backed implementation of [`StorageSlot`].
///
/// Each key maps to `<root>/<key>.json`, read and written whole. There is no
/// locking against a second process; last writer wins, matching how the app
/// treats this data (a personal local cache, not a system of record).
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    root: PathBuf,
}

impl FileSlotStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, DomainError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            DomainError::DataDirError(format!(
                "Failed to create data directory {}: {}",
                root.display(),
                e
            ))
        })?;
        debug!(?root, "Opened slot store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageSlot for FileSlotStore {
    #[instrument(level = "debug", skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::StorageError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    #[instrument(level = "debug", skip(self, value))]
    fn write(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.slot_path(key);
        fs::write(&path, value).map_err(|e| {
            DomainError::StorageError(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
