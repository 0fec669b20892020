use thiserror::Error;

use crate::catalog::StoreError;
use crate::propagation::PropagationError;
use crate::tle::TleError;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("satellite {0} not found")]
    NotFound(u32),
    #[error("invalid tle: {0}")]
    InvalidTle(#[from] TleError),
    #[error("propagation failed: {0}")]
    Propagation(#[from] PropagationError),
    #[error("satellite {0} has no stored coordinates")]
    MissingCoordinates(u32),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
