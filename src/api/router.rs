use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // CORS: the dashboard is served from arbitrary origins; everything here
    // is read-only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        .route("/status", get(handlers::status::snapshot))
        .route("/signals", get(handlers::signals::list))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
