use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::models::{BotStatus, StatusSnapshot};
use crate::store::{scan_repo, status_repo};
use crate::AppState;

/// GET /status — bot health plus the most recent scans.
///
/// Always 200: a store outage degrades to the offline default and an empty
/// scan list, never to an error response. The two reads are independent;
/// either half can be fresher than the other.
pub async fn snapshot(State(state): State<AppState>) -> impl IntoResponse {
    let (status, recent_scans) = tokio::join!(
        status_repo::current(&state.store),
        scan_repo::recent(&state.store, scan_repo::DEFAULT_LIMIT),
    );

    let snapshot = StatusSnapshot {
        status: status.unwrap_or_else(BotStatus::offline),
        recent_scans,
    };

    // Freshness is the point of this endpoint; no intermediary may cache it.
    ([(header::CACHE_CONTROL, "no-store")], Json(snapshot))
}
