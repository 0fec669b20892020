use log::error;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::catalog::SatelliteRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub trait SatelliteStore: Send + Sync {
    fn find_by_id(&self, satid: u32) -> Result<Option<SatelliteRecord>, StoreError>;
    fn find_all(&self) -> Result<Vec<SatelliteRecord>, StoreError>;
    fn save(&self, record: SatelliteRecord) -> Result<SatelliteRecord, StoreError>;
}

pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        FileStore { base }
    }

    fn record_path(&self, satid: u32) -> PathBuf {
        self.base.join(format!("{}.yaml", satid))
    }
}

impl SatelliteStore for FileStore {
    fn find_by_id(&self, satid: u32) -> Result<Option<SatelliteRecord>, StoreError> {
        let path = self.record_path(satid);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_yaml::from_str(&content)?))
    }

    fn find_all(&self) -> Result<Vec<SatelliteRecord>, StoreError> {
        if !self.base.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in self.base.read_dir()? {
            let entry = entry?;
            let entry_path = entry.path();

            if !entry_path.is_file() || entry_path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }

            let content = match std::fs::read_to_string(&entry_path) {
                Ok(content) => content,
                Err(e) => {
                    error!("Failed to read record file {}: {}", entry_path.display(), e);
                    continue;
                }
            };

            match serde_yaml::from_str::<SatelliteRecord>(&content) {
                Ok(record) => records.push(record),
                Err(e) => {
                    error!("Failed to parse record {}: {}", entry_path.display(), e);
                    continue;
                }
            }
        }

        records.sort_by_key(|r| r.satid);
        Ok(records)
    }

    fn save(&self, record: SatelliteRecord) -> Result<SatelliteRecord, StoreError> {
        std::fs::create_dir_all(&self.base)?;

        // Each save stages its own file, then renames it over the record.
        let mut staging = NamedTempFile::new_in(&self.base)?;
        staging.write_all(serde_yaml::to_string(&record)?.as_bytes())?;
        staging
            .persist(self.record_path(record.satid))
            .map_err(|e| e.error)?;
        Ok(record)
    }
}
