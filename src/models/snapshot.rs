use serde::{Deserialize, Serialize};

use super::{BotStatus, Scan, Signal};

/// Wire shape of `GET /status`: bot health plus the most recent scans.
///
/// The two halves come from independent store reads, so they may reflect
/// slightly different instants. Best-effort recency, not a point-in-time
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: BotStatus,
    pub recent_scans: Vec<Scan>,
}

/// Wire shape of `GET /signals`. `count` is always `signals.len()`, not a
/// stored counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalsSnapshot {
    pub signals: Vec<Signal>,
    pub count: usize,
}
