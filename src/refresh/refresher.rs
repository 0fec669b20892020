use futures::stream::{self, StreamExt};
use log::{info, warn};
use serde::Serialize;
use std::time::Duration;
use utoipa::ToSchema;

use crate::catalog::SatelliteRecord;
use crate::n2yo::TleSource;
use crate::position::PositionResolver;
use crate::refresh::RefreshError;
use crate::tle::OrbitalElementSet;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RefreshFailure {
    pub satid: u32,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct RefreshReport {
    pub updated: Vec<u32>,
    pub failures: Vec<RefreshFailure>,
}

pub struct Refresher<S> {
    source: S,
    resolver: PositionResolver,
    fetch_timeout: Duration,
    concurrency: usize,
}

impl<S: TleSource> Refresher<S> {
    pub fn new(source: S, resolver: PositionResolver) -> Self {
        Self {
            source,
            resolver,
            fetch_timeout: Duration::from_secs(30),
            concurrency: 4,
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch_and_save(&self, satid: u32) -> Result<SatelliteRecord, RefreshError> {
        let fetched = tokio::time::timeout(self.fetch_timeout, self.source.fetch_tle(satid))
            .await
            .map_err(|_| RefreshError::Timeout(satid))??;
        OrbitalElementSet::parse(&fetched.tle)?;

        let store = self.resolver.store();
        let mut record = match store.find_by_id(satid)? {
            Some(record) => record,
            None => SatelliteRecord::new(satid, fetched.info.satname.clone()),
        };
        if !fetched.info.satname.is_empty() {
            record.satname = fetched.info.satname;
        }
        record.tle = Some(fetched.tle);
        Ok(store.save(record)?)
    }

    pub async fn refresh_one(&self, satid: u32) -> Result<SatelliteRecord, RefreshError> {
        self.fetch_and_save(satid).await?;
        self.resolver.resolve_current(satid)?;
        Ok(self.resolver.resolve_xyz(satid)?)
    }

    pub async fn refresh_all(&self) -> Result<RefreshReport, RefreshError> {
        let satids: Vec<u32> = self
            .resolver
            .store()
            .find_all()?
            .into_iter()
            .map(|r| r.satid)
            .collect();
        info!("Refreshing {} satellites", satids.len());

        let results: Vec<(u32, Result<SatelliteRecord, RefreshError>)> = stream::iter(satids)
            .map(|satid| async move { (satid, self.refresh_one(satid).await) })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut report = RefreshReport::default();
        for (satid, result) in results {
            match result {
                Ok(_) => report.updated.push(satid),
                Err(e) => {
                    warn!("Failed to refresh satellite {}: {}", satid, e);
                    report.failures.push(RefreshFailure {
                        satid,
                        error: e.to_string(),
                    });
                }
            }
        }
        report.updated.sort_unstable();
        report.failures.sort_by_key(|f| f.satid);

        info!(
            "Refresh finished: {} updated, {} failed",
            report.updated.len(),
            report.failures.len()
        );
        Ok(report)
    }
}
