mod memory;
mod record;
mod storage;

pub use memory::MemoryStore;
pub use record::SatelliteRecord;
pub use storage::{FileStore, SatelliteStore, StoreError};
