use std::sync::OnceLock;

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus exporter and register all application metrics.
/// Only one recorder may exist per process, so repeat calls (tests build an
/// app per test) reuse the first handle.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            // Pre-register counters so they appear even before the first increment.
            counter!("store_requests_total").absolute(0);
            counter!("store_read_failures_total").absolute(0);
            counter!("snapshot_refreshes_total").absolute(0);
            counter!("snapshot_refresh_failures_total").absolute(0);
            counter!("signals_served_total").absolute(0);

            handle
        })
        .clone()
}
