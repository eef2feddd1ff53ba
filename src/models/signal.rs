use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PopConfidence, RiskLevel, SignalStrength};

/// One detected trading opportunity, exactly as the scanner persists it.
///
/// Signals are append-only: once written to the store they are never
/// updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    /// On-chain mint address of the token.
    pub address: String,
    pub price_usd: f64,

    // Scoring
    pub total_score: i64,
    pub pop_score: f64,
    pub pop_confidence: PopConfidence,
    pub expected_return: f64,
    pub max_drawdown: f64,
    pub signal_strength: SignalStrength,
    pub risk_level: RiskLevel,

    // Security flags
    pub is_locked: bool,
    pub lock_percentage: f64,
    pub is_bundled: bool,
    pub bundle_percentage: f64,
    pub security_score: i64,
    /// Points subtracted from the total for bundled supply.
    pub bundle_penalty: i64,

    // Component sub-scores
    pub liquidity_score: i64,
    pub volume_ratio_score: i64,
    pub momentum_score: i64,
    pub buy_pressure_score: i64,
    pub trend_score: i64,

    // Trade levels
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit_1: f64,
    pub take_profit_2: f64,
    pub take_profit_3: f64,
    pub risk_reward_ratio: f64,

    pub security_warnings: Vec<String>,
    /// Named factors contributing to the probability-of-profit estimate.
    pub pop_factors: HashMap<String, f64>,
    /// Set once the upstream Telegram notification succeeded.
    pub telegram_sent: bool,
}
