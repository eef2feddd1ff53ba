//! Terminal consumer for the snapshot cache: polls the dashboard API and
//! logs each refresh until interrupted.

use std::time::Duration;

use signalbot::client::{ApiClient, SnapshotCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let base_url =
        std::env::var("SIGNALBOT_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".into());
    let period_secs = std::env::var("POLL_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let client = ApiClient::new(reqwest::Client::new(), base_url.clone());
    let cache = SnapshotCache::start(client, Duration::from_secs(period_secs));
    let mut updates = cache.subscribe();

    tracing::info!(base_url = %base_url, period_secs, "Watching signal feed (ctrl-c to stop)");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                tracing::info!(
                    status = %state.status.status,
                    scans = state.recent_scans.len(),
                    signals = state.signals.len(),
                    "Snapshot refreshed"
                );
                for signal in state.signals.iter().take(5) {
                    tracing::info!(
                        symbol = %signal.symbol,
                        score = signal.total_score,
                        strength = %signal.signal_strength,
                        risk = %signal.risk_level,
                        "signal"
                    );
                }
            }
        }
    }

    cache.stop();
    tracing::info!("Watch stopped");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
