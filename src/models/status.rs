use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotState {
    Running,
    Stopped,
    /// Never written by the producer; substituted by the serving side when
    /// the `bot_status` key is absent or has expired.
    Offline,
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotState::Running => write!(f, "running"),
            BotState::Stopped => write!(f, "stopped"),
            BotState::Offline => write!(f, "offline"),
        }
    }
}

/// Health snapshot of the scanner process. Exactly one live instance exists
/// in the store; every write fully replaces the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotStatus {
    pub status: BotState,
    pub scan_count: u64,
    pub signals_sent: u64,
    pub errors_count: u64,
    pub last_scan: Option<DateTime<Utc>>,
    pub watchlist: Vec<String>,
    pub watchlist_size: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BotStatus {
    /// The response-only default used when no status has ever been written
    /// (or the key expired). Never persisted back to the store.
    pub fn offline() -> Self {
        Self {
            status: BotState::Offline,
            scan_count: 0,
            signals_sent: 0,
            errors_count: 0,
            last_scan: None,
            watchlist: Vec::new(),
            watchlist_size: 0,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_default_is_all_zeroes() {
        let status = BotStatus::offline();
        assert_eq!(status.status, BotState::Offline);
        assert_eq!(status.scan_count, 0);
        assert_eq!(status.signals_sent, 0);
        assert_eq!(status.errors_count, 0);
        assert!(status.watchlist.is_empty());
        assert!(status.last_scan.is_none());
    }

    #[test]
    fn state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BotState::Running).unwrap(),
            "\"running\""
        );
    }
}
