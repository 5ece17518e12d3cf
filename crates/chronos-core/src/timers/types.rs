use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use super::errors::TimerError;

/// Opaque timer identity, stored as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TimerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TimerId)
    }
}

/// A named target date.
///
/// `date` keeps the text the user entered (a local date-time such as
/// `2025-03-02T01:02`). It is parsed on demand so the persisted form stays
/// byte-for-byte what was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub id: TimerId,
    pub title: String,
    pub date: String,
}

impl Timer {
    /// Local wall-clock value of the target.
    pub fn target_local(&self) -> Result<NaiveDateTime, TimerError> {
        parse_local_datetime(&self.date)
    }

    /// Target as an instant in the host's local time zone.
    pub fn target_instant(&self) -> Result<DateTime<FixedOffset>, TimerError> {
        let naive = self.target_local()?;
        resolve_local(naive).ok_or_else(|| TimerError::UnresolvableDate {
            date: self.date.clone(),
        })
    }
}

/// Contents of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerDraft {
    pub title: String,
    pub date: String,
}

impl TimerDraft {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
        }
    }

    /// Draft prefilled from an existing timer, for editing.
    pub fn from_timer(timer: &Timer) -> Self {
        Self {
            title: timer.title.clone(),
            date: timer.date.clone(),
        }
    }

    /// False when the title or the date is empty. Incomplete drafts are
    /// rejected without saving anything.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.date.is_empty()
    }

    /// Check the draft and return the parsed target.
    pub fn validate(&self) -> Result<NaiveDateTime, TimerError> {
        if !self.is_complete() {
            return Err(TimerError::IncompleteDraft);
        }
        parse_local_datetime(&self.date)
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a local date-time as produced by a date-time picker.
///
/// Accepts `YYYY-MM-DDTHH:MM` with optional seconds and fraction (a space
/// may replace the `T`). A bare `YYYY-MM-DD` means local midnight.
pub fn parse_local_datetime(input: &str) -> Result<NaiveDateTime, TimerError> {
    let trimmed = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight);
    }

    Err(TimerError::InvalidDate {
        date: input.to_string(),
    })
}

/// Resolve a local wall-clock value in the host time zone.
pub fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    resolve_in(naive, &Local)
}

/// Resolve a wall-clock value in `tz`.
///
/// Ambiguous values (clocks turned back) take the earlier instant. Values
/// inside a gap (clocks turned forward) move forward one hour.
pub fn resolve_in<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<FixedOffset>> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Some(dt.fixed_offset());
    }

    let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
    tz.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| dt.fixed_offset())
}
