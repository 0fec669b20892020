use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::n2yo::{CatalogInfo, CatalogTle, FetchError, TleSource};

#[derive(Default)]
pub struct StubSource {
    pub tles: HashMap<u32, String>,
    pub failing: HashSet<u32>,
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
}

impl StubSource {
    pub fn with_tles(tles: impl IntoIterator<Item = (u32, String)>) -> Self {
        Self {
            tles: tles.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl TleSource for StubSource {
    async fn fetch_tle(&self, satid: u32) -> Result<CatalogTle, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&satid) {
            return Err(FetchError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        }
        let tle = self.tles.get(&satid).ok_or(FetchError::EmptyTle(satid))?;
        Ok(CatalogTle {
            info: CatalogInfo {
                satid,
                satname: format!("SAT {}", satid),
            },
            tle: tle.clone(),
        })
    }
}
