pub mod client;
pub mod scan_repo;
pub mod signal_repo;
pub mod status_repo;

pub use client::{RedisStore, StoreError};

use serde::de::DeserializeOwned;

/// Decode a batch of raw list entries, skipping any record that no longer
/// parses (the lists outlive producer schema changes). Order is preserved.
pub(crate) fn decode_records<T: DeserializeOwned>(key: &str, entries: &[String]) -> Vec<T> {
    entries
        .iter()
        .filter_map(|raw| match serde_json::from_str(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, key, "Skipping undecodable record");
                None
            }
        })
        .collect()
}
