//! JSON persistence for [`GameRecord`] so results survive between screens.

use super::record::GameRecord;
use std::fs::{rename, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    NotFound { path: String },
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, record: &GameRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(record)?;

        // Atomic save: write to temp file, then rename
        let temp_path = self.temp_path();
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.sync_all()?;
        }
        rename(&temp_path, &self.path)?;

        log::debug!("Saved game record ({} bytes) to {:?}", data.len(), self.path);
        Ok(())
    }

    /// Sibling of the record file with `.tmp` appended to its full name.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn load(&self) -> Result<GameRecord, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound { path: self.path.display().to_string() });
        }

        let data = std::fs::read(&self.path)?;
        let record = serde_json::from_slice(&data)?;

        log::debug!("Loaded game record from {:?}", self.path);
        Ok(record)
    }

    /// Missing file yields an empty record.
    pub fn load_or_default(&self) -> Result<GameRecord, StoreError> {
        match self.load() {
            Err(StoreError::NotFound { .. }) => Ok(GameRecord::default()),
            other => other,
        }
    }
}
