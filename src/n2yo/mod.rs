mod client;
mod error;
#[cfg(test)]
pub(crate) mod stub;
mod types;

pub use client::{N2yoClient, TleSource, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use types::{CatalogInfo, CatalogTle};
