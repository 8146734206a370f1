use anyhow::{Context, Result};
use gradebook_core::ports::RecordStore;
use gradebook_core::AcademicRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::get_default_data_path;

/// File-based record store that implements RecordStore
///
/// The record is written as a TOML document under the `terms` key.
pub struct FileRecordStore {
    data_path: PathBuf,
}

impl FileRecordStore {
    pub fn new() -> Self {
        Self {
            data_path: get_default_data_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(data_path: P) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.data_path
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self) -> Result<Option<AcademicRecord>> {
        if !self.data_path.exists() {
            debug!("No record file at {}", self.data_path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.data_path)
            .with_context(|| format!("Failed to read record file: {}", self.data_path.display()))?;

        if contents.trim().is_empty() {
            debug!("Record file {} is empty", self.data_path.display());
            return Ok(None);
        }

        let record: AcademicRecord = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse record file: {}", self.data_path.display()))?;

        Ok(Some(record))
    }

    fn save(&self, record: &AcademicRecord) -> Result<()> {
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create record directory")?;
        }

        let contents = toml::to_string_pretty(record)
            .context("Failed to serialize record to TOML")?;

        fs::write(&self.data_path, contents)
            .with_context(|| format!("Failed to write record file: {}", self.data_path.display()))?;

        debug!("Saved {} terms to {}", record.terms().len(), self.data_path.display());
        Ok(())
    }
}

impl Default for FileRecordStore {
    fn default() -> Self {
        Self::new()
    }
}
