use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;
use wellpal::domain::NewPostcard;
use wellpal::infrastructure::FileSlotStore;

/// Test fixture owning a temporary data directory for slot stores
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().to_path_buf();

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Open a fresh store over the same directory, as a reloaded app would.
    pub fn open_store(&self) -> Result<FileSlotStore> {
        FileSlotStore::new(&self.path).context("Failed to open slot store")
    }

    /// Path of the file backing one storage slot.
    pub fn slot_file(&self, key: &str) -> PathBuf {
        self.path.join(format!("{key}.json"))
    }
}

#[allow(dead_code)]
pub fn postcard_input(note: &str) -> NewPostcard {
    NewPostcard {
        image_data_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        note: note.to_string(),
        mood: "😊".to_string(),
        location: "Campus".to_string(),
    }
}
