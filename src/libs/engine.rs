//! Attendance reconciliation engine.
//!
//! Applies entry/exit events to the interval store under the
//! at-most-one-open-interval-per-(user, location) invariant and aggregates
//! intervals into per-location durations for a date range.
//!
//! The engine is stateless: every operation re-reads and re-writes through
//! the store, so it survives process restarts and multiple workers. The two
//! irregular flows are deliberately not errors:
//!
//! - entry while an interval is already open is rejected with the open
//!   interval attached, so the caller can tell the user to exit first
//!   (silently truncating a forgotten long session is worse than nagging);
//! - exit with nothing open asks for confirmation, and only a confirmed
//!   follow-up writes a zero-length auto-closed interval.

use crate::db::intervals::{Interval, Intervals, OpenAttempt};
use crate::libs::report::DateRange;
use anyhow::Result;
use chrono::{DateTime, Duration, Local};

/// Outcome of an entry event.
#[derive(Debug)]
pub enum CheckIn {
    /// A new open interval was recorded.
    Opened(Interval),
    /// An interval is already open at this location; the entry was rejected
    /// and the user must exit first.
    AlreadyOpen(Interval),
}

/// Outcome of an exit event.
#[derive(Debug)]
pub enum CheckOut {
    /// The open interval was closed at the event timestamp.
    Closed { interval: Interval, duration: Duration },
    /// Nothing was open; no data was written. The caller should prompt the
    /// user to confirm an auto entry-and-exit record.
    ConfirmationRequired,
}

/// One interval prepared for reporting. `shown_end` substitutes the range
/// end for still-open intervals; the stored record keeps its NULL end.
#[derive(Debug)]
pub struct IntervalRow {
    pub interval: Interval,
    pub shown_end: DateTime<Local>,
    pub duration: Duration,
}

#[derive(Debug)]
pub struct LocationStat {
    pub location: String,
    pub total: Duration,
}

#[derive(Debug)]
pub struct AttendanceStats {
    pub range: DateRange,
    pub rows: Vec<IntervalRow>,
    pub per_location: Vec<LocationStat>,
    pub total: Duration,
}

/// Records an entry at `location`, unless an interval is already open there.
pub fn check_in(user_id: i64, location: &str, now: DateTime<Local>) -> Result<CheckIn> {
    let intervals = Intervals::new()?;
    match intervals.insert_open_checked(user_id, location, now)? {
        OpenAttempt::Opened(interval) => Ok(CheckIn::Opened(interval)),
        OpenAttempt::Conflict(existing) => Ok(CheckIn::AlreadyOpen(existing)),
    }
}

/// Records an exit at `location`, closing the open interval if there is one.
pub fn check_out(user_id: i64, location: &str, now: DateTime<Local>) -> Result<CheckOut> {
    let intervals = Intervals::new()?;
    match intervals.close_latest_open(user_id, location, now, false)? {
        Some(interval) => {
            let duration = interval.end.map(|end| end - interval.start).unwrap_or_else(Duration::zero);
            Ok(CheckOut::Closed { interval, duration })
        }
        None => Ok(CheckOut::ConfirmationRequired),
    }
}

/// Writes the confirmed auto entry-and-exit record: a single interval with
/// `start == end == now` and the auto-closed flag set.
pub fn confirm_auto_entry(user_id: i64, location: &str, now: DateTime<Local>) -> Result<Interval> {
    let intervals = Intervals::new()?;
    intervals.insert_closed(user_id, location, now, now, true)
}

/// Aggregates intervals whose start falls inside `range`.
///
/// Open intervals are capped at the range end, or at `now` for ranges that
/// reach into the future (a same-day report). `known_locations` drives the
/// subtotal ordering: every configured location appears even with zero
/// duration, then locations found only in the data follow in first-seen
/// order.
pub fn range_stats(user_id: i64, range: &DateRange, now: DateTime<Local>, known_locations: &[String]) -> Result<AttendanceStats> {
    let intervals = Intervals::new()?;
    let from = range.start_instant();
    let to = range.end_instant_exclusive();
    let cap = to.min(now);

    let mut per_location: Vec<LocationStat> = known_locations
        .iter()
        .map(|location| LocationStat {
            location: location.clone(),
            total: Duration::zero(),
        })
        .collect();
    let mut rows = Vec::new();
    let mut total = Duration::zero();

    for interval in intervals.fetch_range(user_id, from, to)? {
        let shown_end = interval.end.unwrap_or(cap).min(cap);
        let duration = (shown_end - interval.start).max(Duration::zero());

        total = total + duration;
        match per_location.iter_mut().find(|stat| stat.location == interval.location) {
            Some(stat) => stat.total = stat.total + duration,
            None => per_location.push(LocationStat {
                location: interval.location.clone(),
                total: duration,
            }),
        }
        rows.push(IntervalRow {
            interval,
            shown_end,
            duration,
        });
    }

    Ok(AttendanceStats {
        range: range.clone(),
        rows,
        per_location,
        total,
    })
}
