use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("catalog has no TLE for satellite {0}")]
    EmptyTle(u32),
}
