use serde::Serialize;

use chronos_core::{Breakdown, Direction, TimerId};

/// One timer in `list --json` output.
#[derive(Debug, Serialize)]
pub struct TimerJson {
    pub id: TimerId,
    pub title: String,
    /// Stored local date-time text.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
    /// Why no breakdown could be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
