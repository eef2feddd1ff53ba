pub mod api;
pub mod client;
pub mod config;
pub mod metrics;
pub mod models;
pub mod store;

use crate::store::RedisStore;

#[derive(Clone)]
pub struct AppState {
    pub store: RedisStore,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
