use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::models::SignalsSnapshot;
use crate::store::signal_repo;
use crate::AppState;

/// Hard cap on a single page. Matches the store's write-time retention cap,
/// so larger requests could not return more anyway.
const MAX_LIMIT: usize = 100;

#[derive(Debug, Default, Deserialize)]
pub struct SignalsQuery {
    /// Kept as a raw string so an unparsable value falls back to the
    /// default instead of rejecting the request.
    limit: Option<String>,
}

impl SignalsQuery {
    fn effective_limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(signal_repo::DEFAULT_LIMIT)
            .min(MAX_LIMIT)
    }
}

/// GET /signals?limit=N — most recent signals, newest first.
///
/// `count` always equals the number of signals returned. Missing or
/// unparsable `limit` means 20; anything above 100 is clamped.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SignalsQuery>,
) -> impl IntoResponse {
    let signals = signal_repo::recent(&state.store, query.effective_limit()).await;
    metrics::counter!("signals_served_total").increment(signals.len() as u64);

    let count = signals.len();
    let snapshot = SignalsSnapshot { signals, count };

    ([(header::CACHE_CONTROL, "no-store")], Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> SignalsQuery {
        SignalsQuery {
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn missing_limit_defaults_to_twenty() {
        assert_eq!(query(None).effective_limit(), 20);
    }

    #[test]
    fn unparsable_limit_defaults_to_twenty() {
        assert_eq!(query(Some("abc")).effective_limit(), 20);
        assert_eq!(query(Some("-5")).effective_limit(), 20);
        assert_eq!(query(Some("1.5")).effective_limit(), 20);
    }

    #[test]
    fn zero_limit_is_honored() {
        assert_eq!(query(Some("0")).effective_limit(), 0);
    }

    #[test]
    fn oversized_limit_is_clamped() {
        assert_eq!(query(Some("1000000")).effective_limit(), 100);
        assert_eq!(query(Some("100")).effective_limit(), 100);
        assert_eq!(query(Some("99")).effective_limit(), 99);
    }
}
