use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

/// GET /health — liveness probe. Always 200: the service keeps serving
/// (degraded) through a store outage, so reachability is a body field, not
/// a status code.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = if state.store.ping().await.is_ok() {
        "connected"
    } else {
        "unreachable"
    };

    Json(json!({ "status": "healthy", "store": store }))
}
