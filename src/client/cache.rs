use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;

use super::ApiClient;
use crate::models::{BotStatus, Scan, Signal};

/// Everything the rendering layer needs, replaced wholesale on each
/// successful refresh cycle. Starts at the offline default until the first
/// fetch lands.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub status: BotStatus,
    pub recent_scans: Vec<Scan>,
    pub signals: Vec<Signal>,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            status: BotStatus::offline(),
            recent_scans: Vec::new(),
            signals: Vec::new(),
            last_refresh: None,
        }
    }
}

/// Poll-driven cache over the snapshot endpoints.
///
/// One fetch immediately on start, then one per period. A cycle publishes
/// only when every fetch in it succeeded; otherwise the previous state is
/// retained untouched. After [`stop`](Self::stop) nothing is published,
/// including results of a fetch that was already in flight.
pub struct SnapshotCache {
    rx: watch::Receiver<DashboardState>,
    stopped: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl SnapshotCache {
    pub fn start(client: ApiClient, period: Duration) -> Self {
        let (tx, rx) = watch::channel(DashboardState::default());
        let stopped = Arc::new(AtomicBool::new(false));
        let flag = stopped.clone();

        let handle = tokio::spawn(async move {
            run_poll_loop(client, tx, flag, period).await;
        });

        Self {
            rx,
            stopped,
            handle,
        }
    }

    /// Clone of the latest published state.
    pub fn latest(&self) -> DashboardState {
        self.rx.borrow().clone()
    }

    /// Change-notification handle for the rendering layer.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.rx.clone()
    }

    /// Cancel the poll loop and discard any in-flight result.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.handle.abort();
    }
}

async fn run_poll_loop(
    client: ApiClient,
    tx: watch::Sender<DashboardState>,
    stopped: Arc<AtomicBool>,
    period: Duration,
) {
    // The first tick completes immediately, giving the initial fetch.
    let mut ticker = interval(period);

    loop {
        ticker.tick().await;
        if stopped.load(Ordering::SeqCst) {
            break;
        }

        let (status, signals) = tokio::join!(client.fetch_status(), client.fetch_signals(None));

        match (status, signals) {
            (Ok(status_snap), Ok(signals_snap)) => {
                // The fetch may have resolved after teardown; never publish then.
                if stopped.load(Ordering::SeqCst) {
                    break;
                }

                metrics::counter!("snapshot_refreshes_total").increment(1);
                tx.send_replace(DashboardState {
                    status: status_snap.status,
                    recent_scans: status_snap.recent_scans,
                    signals: signals_snap.signals,
                    last_refresh: Some(Utc::now()),
                });
            }
            (status, signals) => {
                metrics::counter!("snapshot_refresh_failures_total").increment(1);
                let error = status
                    .err()
                    .map(|e| e.to_string())
                    .or_else(|| signals.err().map(|e| e.to_string()))
                    .unwrap_or_default();
                tracing::warn!(error = %error, "Snapshot refresh failed; keeping previous data");
            }
        }
    }
}
