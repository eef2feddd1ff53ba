use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use signalbot::models::{
    BotState, BotStatus, PopConfidence, RiskLevel, Scan, Signal, SignalStrength,
};
use signalbot::store::RedisStore;
use signalbot::AppState;

// ---------------------------------------------------------------------------
// Mock Upstash Redis REST server
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MockRedisInner {
    // Front of each vec is the most recent entry, as with LPUSH.
    lists: HashMap<String, Vec<String>>,
    scalars: HashMap<String, String>,
}

/// In-memory stand-in for the Upstash REST API, speaking the same
/// command-array protocol the store client posts.
#[derive(Clone, Default)]
pub struct MockRedis {
    inner: Arc<Mutex<MockRedisInner>>,
}

impl MockRedis {
    #[allow(dead_code)]
    pub fn list_len(&self, key: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .lists
            .get(key)
            .map_or(0, Vec::len)
    }

    #[allow(dead_code)]
    pub fn scalar(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().scalars.get(key).cloned()
    }
}

fn range_bounds(len: usize, start: usize, stop: i64) -> (usize, usize) {
    let stop = if stop < 0 { len as i64 + stop } else { stop };
    let end = ((stop + 1).max(0) as usize).min(len);
    (start.min(len), end)
}

async fn dispatch(State(mock): State<MockRedis>, Json(command): Json<Vec<String>>) -> Json<Value> {
    let mut inner = mock.inner.lock().unwrap();

    let result = match command.first().map(String::as_str) {
        Some("PING") => json!("PONG"),
        Some("LPUSH") => {
            let list = inner.lists.entry(command[1].clone()).or_default();
            list.insert(0, command[2].clone());
            json!(list.len())
        }
        Some("LTRIM") => {
            let start: usize = command[2].parse().unwrap();
            let stop: i64 = command[3].parse().unwrap();
            if let Some(list) = inner.lists.get_mut(&command[1]) {
                let (start, end) = range_bounds(list.len(), start, stop);
                *list = if start < end {
                    list[start..end].to_vec()
                } else {
                    Vec::new()
                };
            }
            json!("OK")
        }
        Some("LRANGE") => {
            let start: usize = command[2].parse().unwrap();
            let stop: i64 = command[3].parse().unwrap();
            let list = inner.lists.get(&command[1]).cloned().unwrap_or_default();
            let (start, end) = range_bounds(list.len(), start, stop);
            if start < end {
                json!(list[start..end].to_vec())
            } else {
                json!(Vec::<String>::new())
            }
        }
        Some("GET") => inner
            .scalars
            .get(&command[1])
            .map_or(Value::Null, |v| json!(v)),
        Some("SET") => {
            inner.scalars.insert(command[1].clone(), command[2].clone());
            json!("OK")
        }
        Some("EXPIRE") => json!(1),
        _ => Value::Null,
    };

    Json(json!({ "result": result }))
}

/// Spawn the mock on an ephemeral port. Returns its base URL plus a handle
/// to the backing data for assertions.
pub async fn spawn_mock_upstash() -> (String, MockRedis) {
    let mock = MockRedis::default();
    let app = Router::new()
        .route("/", post(dispatch))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), mock)
}

// ---------------------------------------------------------------------------
// App fixtures
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub fn test_store(upstash_url: &str) -> RedisStore {
    RedisStore::new(
        upstash_url.to_string(),
        "test-token".into(),
        Duration::from_secs(2),
    )
    .expect("failed to build store client")
}

#[allow(dead_code)]
pub fn build_state(upstash_url: &str) -> AppState {
    AppState {
        store: test_store(upstash_url),
        metrics_handle: signalbot::metrics::init_metrics(),
    }
}

// ---------------------------------------------------------------------------
// Record seeds
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub fn sample_signal(symbol: &str) -> Signal {
    Signal {
        timestamp: Utc::now(),
        symbol: symbol.to_string(),
        address: format!("{symbol}mint1111111111111111111111111111"),
        price_usd: 0.000023,
        total_score: 82,
        pop_score: 71.5,
        pop_confidence: PopConfidence::High,
        expected_return: 0.24,
        max_drawdown: 0.11,
        signal_strength: SignalStrength::Strong,
        risk_level: RiskLevel::Low,
        is_locked: true,
        lock_percentage: 95.0,
        is_bundled: false,
        bundle_percentage: 0.0,
        security_score: 18,
        bundle_penalty: 0,
        liquidity_score: 18,
        volume_ratio_score: 16,
        momentum_score: 21,
        buy_pressure_score: 15,
        trend_score: 12,
        entry_price: 0.000023,
        stop_loss: 0.00002116,
        take_profit_1: 0.00002645,
        take_profit_2: 0.0000299,
        take_profit_3: 0.0000345,
        risk_reward_ratio: 1.63,
        security_warnings: vec![],
        pop_factors: [("momentum".to_string(), 0.35), ("volume".to_string(), 0.25)]
            .into_iter()
            .collect(),
        telegram_sent: true,
    }
}

#[allow(dead_code)]
pub fn sample_scan(symbol: &str, is_valid_signal: bool) -> Scan {
    Scan {
        timestamp: Utc::now(),
        symbol: symbol.to_string(),
        price_usd: 1.34,
        total_score: if is_valid_signal { 78 } else { 41 },
        pop_score: 55.0,
        signal_strength: if is_valid_signal {
            SignalStrength::Strong
        } else {
            SignalStrength::Weak
        },
        risk_level: RiskLevel::Medium,
        is_valid_signal,
    }
}

#[allow(dead_code)]
pub fn sample_status() -> BotStatus {
    BotStatus {
        status: BotState::Running,
        scan_count: 42,
        signals_sent: 7,
        errors_count: 1,
        last_scan: Some(Utc::now()),
        watchlist: vec!["BONK".into(), "WIF".into(), "JUP".into()],
        watchlist_size: 3,
        updated_at: None,
    }
}
