use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PropagationError {
    #[error("elements rejected by propagator: {0}")]
    Elements(String),
    #[error("epoch {epoch} is {offset_days:.1} days from the element set epoch (limit {limit_days} days)")]
    EpochOutOfRange {
        epoch: DateTime<Utc>,
        offset_days: f64,
        limit_days: f64,
    },
    #[error("propagation failed: {0}")]
    Propagation(String),
}
