//! Per-timer tick sources that keep each mounted timer's breakdown current.
//!
//! Every [`TimerView`] owns at most one tick source. The [`TimerBoard`]
//! keeps one view per listed timer and reconciles them with the stored list.

use std::time::Duration;

pub mod board;
pub mod clock;
pub mod view;

pub use board::{BoardEntry, SyncSummary, TimerBoard};
pub use clock::{Clock, SystemClock};
pub use view::{Frame, TimerView};

/// Default cadence of a tick source (1 Hz).
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);
