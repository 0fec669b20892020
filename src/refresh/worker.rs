use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::n2yo::TleSource;
use crate::refresh::Refresher;

/// Background task running a refresh cycle every `period`, the first one
/// immediately. Dropping the handle without `stop` also ends the task.
pub struct RefreshHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn spawn<S>(refresher: Arc<Refresher<S>>, period: Duration) -> Self
    where
        S: TleSource + 'static,
    {
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(run_refresh_loop(refresher, period, stop_rx));
        Self { stop_tx, join }
    }

    pub async fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.join.await;
    }
}

async fn run_refresh_loop<S: TleSource>(
    refresher: Arc<Refresher<S>>,
    period: Duration,
    mut stop_rx: oneshot::Receiver<()>,
) {
    info!("Refresh worker started, period {}", humantime::format_duration(period));
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let should_stop = tokio::select! {
            _ = interval.tick() => false,
            _ = &mut stop_rx => true,
        };
        if should_stop {
            break;
        }

        let should_stop = tokio::select! {
            result = refresher.refresh_all() => {
                if let Err(e) = result {
                    error!("Refresh cycle failed: {}", e);
                }
                false
            }
            _ = &mut stop_rx => true,
        };
        if should_stop {
            break;
        }
    }

    info!("Refresh worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryStore, SatelliteRecord, SatelliteStore};
    use crate::n2yo::stub::StubSource;
    use crate::position::PositionResolver;
    use crate::propagation::stub::StubPropagator;
    use crate::tle::ISS_TLE;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn first_cycle_runs_immediately_and_stop_ends_task() {
        let store = Arc::new(MemoryStore::with_records([SatelliteRecord::new(1, "ONE")]));
        let resolver = PositionResolver::new(store.clone(), Arc::new(StubPropagator));
        let source = StubSource::with_tles([(1, ISS_TLE.to_string())]);
        let refresher = Arc::new(Refresher::new(source, resolver));

        let handle = RefreshHandle::spawn(refresher.clone(), Duration::from_secs(3600));

        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let record = store.find_by_id(1).unwrap().unwrap();
                if record.xyz_coordinates.is_some() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();

        handle.stop().await;
        assert_eq!(refresher.source().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stop_cancels_slow_cycle() {
        let store = Arc::new(MemoryStore::with_records([SatelliteRecord::new(1, "ONE")]));
        let resolver = PositionResolver::new(store.clone(), Arc::new(StubPropagator));
        let mut source = StubSource::with_tles([(1, ISS_TLE.to_string())]);
        source.delay = Some(Duration::from_secs(60));
        let refresher = Arc::new(Refresher::new(source, resolver));

        let handle = RefreshHandle::spawn(refresher, Duration::from_secs(3600));
        tokio::time::sleep(Duration::from_millis(20)).await;

        tokio::time::timeout(Duration::from_secs(5), handle.stop())
            .await
            .unwrap();
        assert_eq!(store.find_by_id(1).unwrap().unwrap().tle, None);
    }
}
