use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RiskLevel, SignalStrength};

/// One evaluation attempt over a watchlist token. Every scan is recorded,
/// whether or not it cleared the signal threshold; `is_valid_signal` marks
/// the ones that produced a [`Signal`](super::Signal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scan {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub price_usd: f64,
    pub total_score: i64,
    pub pop_score: f64,
    pub signal_strength: SignalStrength,
    pub risk_level: RiskLevel,
    pub is_valid_signal: bool,
}
