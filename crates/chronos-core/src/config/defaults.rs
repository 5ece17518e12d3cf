//! Default values for configuration fields left unset.

use std::time::Duration;

use crate::config::types::{DashboardConfig, DisplayConfig, RefreshConfig};
use crate::display::render::DEFAULT_DATE_FORMAT;

pub const DEFAULT_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_RELOAD_SECS: u64 = 2;

impl DisplayConfig {
    /// Returns whether ANSI colors are enabled, defaulting to true.
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

impl RefreshConfig {
    /// Returns the tick interval in milliseconds, defaulting to 1000.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }

    /// Returns the list reload period in seconds, defaulting to 2.
    pub fn reload_secs(&self) -> u64 {
        self.reload_secs.unwrap_or(DEFAULT_RELOAD_SECS)
    }

    pub fn reload(&self) -> Duration {
        Duration::from_secs(self.reload_secs())
    }
}

impl DashboardConfig {
    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }
}
