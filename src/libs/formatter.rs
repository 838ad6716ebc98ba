//! Duration formatting shared by the attendance and notes reports.
//!
//! A single set of helpers so report kinds cannot drift apart: text output
//! uses `format_duration` ("8 hours 0 minutes"), tabular export uses
//! `format_hours` (fractional hours, two decimals). Negative durations are
//! treated as zero.

use chrono::Duration;

/// Formats a duration as `"H hours M minutes"`.
pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{} hours {} minutes", minutes / 60, minutes % 60)
}

/// Formats a duration as `HH:MM` for compact table cells.
pub fn format_hhmm(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Converts a duration to fractional hours, rounded to two decimals.
pub fn format_hours(duration: &Duration) -> f64 {
    let minutes = duration.num_minutes().max(0) as f64;
    (minutes / 60.0 * 100.0).round() / 100.0
}
