//! Draft storage API.

use crate::{StoreError, StoreResult};
use sc_record::InspectionRecord;
use std::fs;
use std::path::PathBuf;

/// Fixed key the draft snapshot is stored under.
pub const DRAFT_KEY: &str = "scorecard-draft";

/// File-backed key-value store, one `<key>.json` document per key.
#[derive(Clone)]
pub struct DraftStore {
    root_dir: PathBuf,
}

impl DraftStore {
    pub fn new(root_dir: PathBuf) -> StoreResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root_dir.join(format!("{key}.json"))
    }

    /// Raw read. A missing key is `None`; so is an unreadable file, since
    /// the caller cannot distinguish the two through this interface.
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Raw write, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn has_draft(&self) -> bool {
        self.key_path(DRAFT_KEY).exists()
    }

    /// Serialize the full record under the fixed draft key, unconditionally.
    pub fn save_draft(&self, record: &InspectionRecord) -> StoreResult<()> {
        let text = record.to_draft_json()?;
        self.set(DRAFT_KEY, &text)
    }

    /// Read the draft snapshot back. Absent draft is `Ok(None)`; a present
    /// but malformed snapshot is an error for the caller to classify.
    pub fn load_draft(&self) -> StoreResult<Option<InspectionRecord>> {
        match self.get(DRAFT_KEY) {
            None => Ok(None),
            Some(text) => {
                let record =
                    InspectionRecord::from_draft_json(&text).map_err(StoreError::Json)?;
                Ok(Some(record))
            }
        }
    }

    pub fn clear_draft(&self) -> StoreResult<()> {
        self.remove(DRAFT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::Score;
    use sc_record::MetadataField;

    fn store(name: &str) -> DraftStore {
        let dir = std::env::temp_dir().join("sc_store_tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        DraftStore::new(dir).unwrap()
    }

    #[test]
    fn missing_draft_is_none() {
        let store = store("missing");
        assert!(!store.has_draft());
        assert!(store.load_draft().unwrap().is_none());
    }

    #[test]
    fn draft_round_trips_through_disk() {
        let store = store("roundtrip");
        let mut record = InspectionRecord::new();
        record.set_metadata(MetadataField::StationName, "Central");
        record.set_score("dustbins", Score::new(0).unwrap());
        record.set_remark("dustbins", "lid missing");

        store.save_draft(&record).unwrap();
        let loaded = store.load_draft().unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn malformed_draft_is_an_error_not_a_panic() {
        let store = store("malformed");
        store.set(DRAFT_KEY, "{not json").unwrap();
        assert!(matches!(store.load_draft(), Err(StoreError::Json(_))));
    }

    #[test]
    fn clear_draft_removes_the_key() {
        let store = store("clear");
        store.save_draft(&InspectionRecord::new()).unwrap();
        assert!(store.has_draft());
        store.clear_draft().unwrap();
        assert!(!store.has_draft());
        // Clearing twice is fine.
        store.clear_draft().unwrap();
    }
}
