use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::types::{Breakdown, Countdown, Direction};

/// Compute the six-field breakdown between `target` and `now`.
///
/// The earlier of the two instants is the start bound and the later one the
/// end bound, so the result does not depend on argument order. Each field is
/// an independent whole-unit count over the full span, reduced modulo the
/// nominal size of the next-larger unit. `days` is therefore
/// "whole days mod 30", not the remainder after removing whole months.
///
/// Years, months and days are counted on local wall-clock values; hours,
/// minutes and seconds on the absolute span.
pub fn compute_breakdown<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Breakdown {
    let (start, end) = if now > target {
        (target, now)
    } else {
        (now, target)
    };

    let start_local = start.naive_local();
    let end_local = end.naive_local();

    // Non-negative because end >= start.
    let span = end.clone() - start.clone();
    let total_seconds = span.num_seconds().max(0) as u64;

    Breakdown {
        years: whole_calendar_years(start_local, end_local),
        months: whole_calendar_months(start_local, end_local) % 12,
        days: whole_calendar_days(start_local, end_local) % 30,
        hours: (total_seconds / 3_600) % 24,
        minutes: (total_seconds / 60) % 60,
        seconds: total_seconds % 60,
    }
}

/// Breakdown plus whether the target lies ahead of `now`.
pub fn compute_countdown<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Countdown {
    let direction = if target > now {
        Direction::Until
    } else {
        Direction::Since
    };

    Countdown {
        direction,
        breakdown: compute_breakdown(target, now),
    }
}

/// Number of whole calendar years from `start` to `end`.
///
/// The calendar-year gap, less one when `end` falls earlier in its year
/// (month, day and time) than `start` does in its own.
pub fn whole_calendar_years(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    if end <= start {
        return 0;
    }

    let difference = (end.year() - start.year()) as u64;
    // Compared as if both were in the same leap year, so Feb 29 has a peer.
    let partial = (end.month(), end.day(), end.time()) < (start.month(), start.day(), start.time());
    difference - u64::from(partial)
}

/// Number of whole calendar months from `start` to `end`.
///
/// Starts from the calendar-month gap and moves `end` back by that many
/// months. Day overflow rolls forward into the next month rather than
/// clamping, and an `end` after Feb 27 is first treated as "Feb 30" (early
/// March). When the moved date falls before `start` the last month is
/// partial and not counted, except that a one-month gap ending on the last
/// day of a month always counts as a whole month.
pub fn whole_calendar_months(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    if end <= start {
        return 0;
    }

    let difference = (end.year() as i64 - start.year() as i64) * 12 + end.month() as i64
        - start.month() as i64;
    if difference < 1 {
        return 0;
    }

    let anchor = if end.month() == 2 && end.day() > 27 {
        rolled_date(end.year() as i64, end.month0() as i64, 30, end.time())
    } else {
        Some(end)
    };
    let shifted = anchor.and_then(|anchor| {
        rolled_date(
            anchor.year() as i64,
            anchor.month0() as i64 - difference,
            anchor.day(),
            anchor.time(),
        )
    });

    let mut partial = shifted.is_none_or(|shifted| shifted < start);
    if difference == 1 && is_last_day_of_month(end) {
        partial = false;
    }

    difference as u64 - u64::from(partial)
}

/// Number of whole 24-hour wall-clock days from `start` to `end`.
pub fn whole_calendar_days(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    end.signed_duration_since(start).num_days().max(0) as u64
}

/// Builds a date from a possibly out-of-range month and day, carrying the
/// excess into following months and years.
fn rolled_date(year: i64, month0: i64, day: u32, time: NaiveTime) -> Option<NaiveDateTime> {
    let year = i32::try_from(year + month0.div_euclid(12)).ok()?;
    let month = month0.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
        .map(|date| date.and_time(time))
}

fn is_last_day_of_month(at: NaiveDateTime) -> bool {
    at.date()
        .succ_opt()
        .is_none_or(|next| next.month() != at.month())
}
