use chrono::Utc;

use crate::models::BotStatus;
use crate::store::{RedisStore, StoreError};

const KEY: &str = "bot_status";

/// A producer that stops writing decays to "absent" within this window,
/// which readers render as offline.
const TTL_SECS: i64 = 120;

/// Replace the stored status wholesale, stamping `updated_at`. Writer side
/// of the contract; called by the scanner after each full watchlist pass.
pub async fn update(store: &RedisStore, status: &BotStatus) -> Result<(), StoreError> {
    let mut stamped = status.clone();
    stamped.updated_at = Some(Utc::now());

    let payload =
        serde_json::to_string(&stamped).map_err(|e| StoreError::Unexpected(e.to_string()))?;
    store.set(KEY, &payload).await?;
    store.expire(KEY, TTL_SECS).await?;
    Ok(())
}

/// Current status, or `None` when never written, expired, or unreachable.
/// Absence is not an error here: callers substitute the offline default.
pub async fn current(store: &RedisStore) -> Option<BotStatus> {
    match store.get(KEY).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!(error = %e, key = KEY, "Stored status is undecodable");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            metrics::counter!("store_read_failures_total").increment(1);
            tracing::error!(error = %e, key = KEY, "Store read failed; treating status as absent");
            None
        }
    }
}
