mod error;
mod refresher;
mod worker;

pub use error::RefreshError;
pub use refresher::{RefreshFailure, RefreshReport, Refresher};
pub use worker::RefreshHandle;
