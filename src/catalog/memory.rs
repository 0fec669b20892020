use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::catalog::{SatelliteRecord, SatelliteStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<u32, SatelliteRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = SatelliteRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.satid, r)).collect()),
        }
    }
}

impl SatelliteStore for MemoryStore {
    fn find_by_id(&self, satid: u32) -> Result<Option<SatelliteRecord>, StoreError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&satid).cloned())
    }

    fn find_all(&self) -> Result<Vec<SatelliteRecord>, StoreError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<_> = records.values().cloned().collect();
        all.sort_by_key(|r| r.satid);
        Ok(all)
    }

    fn save(&self, record: SatelliteRecord) -> Result<SatelliteRecord, StoreError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(record.satid, record.clone());
        Ok(record)
    }
}
