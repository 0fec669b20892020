pub mod error;
pub mod refresh;
pub mod satellites;
