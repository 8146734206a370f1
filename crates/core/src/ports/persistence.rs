use crate::domain::record::AcademicRecord;
use anyhow::{anyhow, Result};
use std::sync::Mutex;

/// Fixed key the record is stored under
///
/// Must match the name of `AcademicRecord`'s `terms` field, which serde uses
/// as the document key.
pub const RECORD_KEY: &str = "terms";

/// Durable storage for the academic record
///
/// Callers load once at startup and save after every completed change.
/// Saves overwrite the whole document; last write wins.
pub trait RecordStore: Send + Sync {
    /// Load the stored record, or `None` on first run
    fn load(&self) -> Result<Option<AcademicRecord>>;

    /// Replace the stored record
    fn save(&self, record: &AcademicRecord) -> Result<()>;
}

/// In-process store holding the last saved record
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    slot: Mutex<Option<AcademicRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: AcademicRecord) -> Self {
        Self {
            slot: Mutex::new(Some(record)),
        }
    }

    /// Snapshot of what was last saved
    pub fn saved(&self) -> Option<AcademicRecord> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> Result<Option<AcademicRecord>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| anyhow!("record store lock poisoned"))?;
        // The snapshot is transient and never survives a save/load cycle
        Ok(slot
            .as_ref()
            .map(|record| AcademicRecord::from_terms(record.terms().to_vec()))
            .transpose()?)
    }

    fn save(&self, record: &AcademicRecord) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow!("record store lock poisoned"))?;
        *slot = Some(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_none() -> Result<()> {
        let store = MemoryRecordStore::new();
        assert!(store.load()?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let store = MemoryRecordStore::new();
        let mut record = AcademicRecord::new();
        record.add_term();
        record.compute_overall_gpa();

        store.save(&record)?;
        let loaded = store.load()?.expect("record was saved");

        assert_eq!(loaded.terms(), record.terms());
        assert!(loaded.overall_gpa().is_none());
        Ok(())
    }

    #[test]
    fn test_record_serializes_under_record_key() -> Result<()> {
        let text = toml::to_string(&AcademicRecord::new())?;
        let document: toml::Table = toml::from_str(&text)?;
        let keys: Vec<_> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![RECORD_KEY]);

        let restored: AcademicRecord = toml::from_str(&text)?;
        assert_eq!(restored.terms().len(), 1);
        Ok(())
    }

    #[test]
    fn test_last_write_wins() -> Result<()> {
        let store = MemoryRecordStore::with_record(AcademicRecord::new());
        let mut record = AcademicRecord::new();
        record.add_term();
        record.add_term();
        store.save(&record)?;

        assert_eq!(store.load()?.map(|r| r.terms().len()), Some(3));
        Ok(())
    }
}
