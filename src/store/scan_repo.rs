use crate::models::Scan;
use crate::store::{self, RedisStore, StoreError};

const LIST_KEY: &str = "scans";

/// Write-time retention cap; every append trims the list back to this.
const MAX_STORED: i64 = 50;

pub const DEFAULT_LIMIT: usize = 20;

/// Prepend a scan record. Writer side of the contract; called by the
/// scanner process after every evaluation, valid signal or not.
pub async fn append(store: &RedisStore, scan: &Scan) -> Result<(), StoreError> {
    let payload =
        serde_json::to_string(scan).map_err(|e| StoreError::Unexpected(e.to_string()))?;
    store.lpush(LIST_KEY, &payload).await?;
    store.ltrim(LIST_KEY, 0, MAX_STORED - 1).await?;
    Ok(())
}

/// The most recent `limit` scans, newest first. Degrades to empty on store
/// failure, same policy as [`signal_repo::recent`](super::signal_repo::recent).
pub async fn recent(store: &RedisStore, limit: usize) -> Vec<Scan> {
    if limit == 0 {
        return Vec::new();
    }

    match store.lrange(LIST_KEY, 0, limit as i64 - 1).await {
        Ok(entries) => store::decode_records(LIST_KEY, &entries),
        Err(e) => {
            metrics::counter!("store_read_failures_total").increment(1);
            tracing::error!(error = %e, key = LIST_KEY, "Store read failed; serving empty list");
            Vec::new()
        }
    }
}
