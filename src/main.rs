use std::time::Duration;

use signalbot::api::router::create_router;
use signalbot::config::AppConfig;
use signalbot::store::RedisStore;
use signalbot::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let store = RedisStore::new(
        config.upstash_url.clone(),
        config.upstash_token.clone(),
        Duration::from_secs(config.store_timeout_secs),
    )?;

    // Startup probe only; an unreachable store is a degraded state, not a
    // fatal one.
    match store.ping().await {
        Ok(()) => tracing::info!("Record store reachable"),
        Err(e) => tracing::warn!(error = %e, "Record store unreachable; serving degraded"),
    }

    let metrics_handle = signalbot::metrics::init_metrics();

    let state = AppState {
        store,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
