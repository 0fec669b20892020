use thiserror::Error;

use crate::catalog::StoreError;
use crate::n2yo::FetchError;
use crate::position::ResolveError;
use crate::tle::TleError;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("fetching satellite {0} timed out")]
    Timeout(u32),
    #[error("catalog returned an invalid tle: {0}")]
    InvalidTle(#[from] TleError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
