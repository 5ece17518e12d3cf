//! Calendar breakdown of the gap between a timer's target and the current
//! instant.

pub mod operations;
pub mod types;

pub use operations::{
    compute_breakdown, compute_countdown, whole_calendar_days, whole_calendar_months,
    whole_calendar_years,
};
pub use types::{Breakdown, Countdown, Direction, Unit};
