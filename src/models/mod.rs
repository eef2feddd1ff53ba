pub mod scan;
pub mod signal;
pub mod snapshot;
pub mod status;

pub use scan::Scan;
pub use signal::Signal;
pub use snapshot::{SignalsSnapshot, StatusSnapshot};
pub use status::{BotState, BotStatus};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SignalStrength
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalStrength {
    Strong,
    Moderate,
    Weak,
    #[serde(rename = "NO SIGNAL")]
    NoSignal,
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStrength::Strong => write!(f, "STRONG"),
            SignalStrength::Moderate => write!(f, "MODERATE"),
            SignalStrength::Weak => write!(f, "WEAK"),
            SignalStrength::NoSignal => write!(f, "NO SIGNAL"),
        }
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Security risk bucket assigned by the producer's security checker.
/// Anything unrecognized decodes as `Unknown` rather than failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
            RiskLevel::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// PopConfidence
// ---------------------------------------------------------------------------

/// Confidence bucket attached to the probability-of-profit estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PopConfidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for PopConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopConfidence::High => write!(f, "HIGH"),
            PopConfidence::Medium => write!(f, "MEDIUM"),
            PopConfidence::Low => write!(f, "LOW"),
        }
    }
}
