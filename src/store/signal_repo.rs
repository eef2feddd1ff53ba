use crate::models::Signal;
use crate::store::{self, RedisStore, StoreError};

const LIST_KEY: &str = "signals";

/// Write-time retention cap; every append trims the list back to this.
const MAX_STORED: i64 = 100;

pub const DEFAULT_LIMIT: usize = 20;

/// Prepend a signal to the store. Writer side of the contract; called by
/// the scanner process, never by the serving path.
pub async fn append(store: &RedisStore, signal: &Signal) -> Result<(), StoreError> {
    let payload =
        serde_json::to_string(signal).map_err(|e| StoreError::Unexpected(e.to_string()))?;
    store.lpush(LIST_KEY, &payload).await?;
    store.ltrim(LIST_KEY, 0, MAX_STORED - 1).await?;
    Ok(())
}

/// The most recent `limit` signals, newest first.
///
/// A store failure degrades to an empty list: logged and counted, never
/// propagated. Staleness is preferred over unavailability on this path.
pub async fn recent(store: &RedisStore, limit: usize) -> Vec<Signal> {
    if limit == 0 {
        // LRANGE key 0 -1 means "the whole list", not "nothing".
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
