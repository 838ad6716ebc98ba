//! Report range computation and rendering, shared by attendance and notes.
//!
//! Calendar-bucket boundaries live here and nowhere else: a week is Monday
//! through Sunday, a month is the calendar month. All boundaries are
//! computed in the internal Gregorian calendar; the display (Persian)
//! calendar appears only in rendered text and parsed literals.

use crate::db::notes::Note;
use crate::libs::calendar;
use crate::libs::engine::AttendanceStats;
use crate::libs::error::HozurError;
use crate::libs::formatter::{format_duration, format_hours};
use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate};
use serde::Serialize;

/// Fixed report period vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
}

/// Parses a period token; anything outside the fixed vocabulary is an
/// `InvalidPeriod`.
pub fn parse_period(token: &str) -> Result<ReportPeriod, HozurError> {
    match token.to_lowercase().as_str() {
        "daily" => Ok(ReportPeriod::Daily),
        "weekly" => Ok(ReportPeriod::Weekly),
        "monthly" => Ok(ReportPeriod::Monthly),
        _ => Err(HozurError::InvalidPeriod(token.to_string())),
    }
}

/// An inclusive date range in the internal calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn start_instant(&self) -> DateTime<Local> {
        local_midnight(self.start)
    }

    /// First instant after the range; intervals starting here are outside.
    pub fn end_instant_exclusive(&self) -> DateTime<Local> {
        local_midnight(self.end + Duration::days(1))
    }
}

fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_hms_opt(0, 0, 0).unwrap();
    naive.and_local_timezone(Local).earliest().unwrap_or_else(|| {
        // midnight can fall inside a DST gap; the following hour never does
        (naive + Duration::hours(1)).and_local_timezone(Local).earliest().unwrap_or_else(Local::now)
    })
}

/// Range covered by a fixed period relative to `today`: the day itself, the
/// Monday..Sunday week containing it, or its calendar month.
pub fn period_range(period: ReportPeriod, today: NaiveDate) -> DateRange {
    match period {
        ReportPeriod::Daily => DateRange { start: today, end: today },
        ReportPeriod::Weekly => {
            let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            DateRange {
                start,
                end: start + Duration::days(6),
            }
        }
        ReportPeriod::Monthly => {
            let start = today.with_day(1).unwrap_or(today);
            DateRange {
                start,
                end: start + Months::new(1) - Duration::days(1),
            }
        }
    }
}

/// Parses two display-calendar literals into a range. A reversed range is
/// not an error; it simply matches nothing.
pub fn custom_range(start_literal: &str, end_literal: &str) -> Result<DateRange, HozurError> {
    Ok(DateRange {
        start: calendar::parse_display(start_literal)?,
        end: calendar::parse_display(end_literal)?,
    })
}

/// Display-calendar date plus `HH:MM`, the timestamp form used in chat text.
pub fn display_datetime(dt: &DateTime<Local>) -> String {
    format!("{} {}", calendar::format_display(dt.date_naive()), dt.format("%H:%M"))
}

fn display_range(range: &DateRange) -> String {
    format!("{} to {}", calendar::format_display(range.start), calendar::format_display(range.end))
}

/// Renders attendance stats as chat text: one block per interval, then
/// per-location subtotals in configured order, then the grand total.
pub fn render_attendance(stats: &AttendanceStats) -> String {
    if stats.rows.is_empty() {
        return format!("📭 No attendance records for {}.", display_range(&stats.range));
    }

    let mut lines = vec![format!("📊 Attendance report {}", display_range(&stats.range))];

    for row in &stats.rows {
        let out_line = match row.interval.end {
            Some(end) => display_datetime(&end),
            None => format!("{} (still open)", display_datetime(&row.shown_end)),
        };
        lines.push(format!(
            "\n📍 {}\n   ⏰ in:  {}\n   🚪 out: {}\n   ⌛ {}",
            row.interval.location,
            display_datetime(&row.interval.start),
            out_line,
            format_duration(&row.duration)
        ));
    }

    lines.push("\n📍 By location:".to_string());
    for stat in &stats.per_location {
        lines.push(format!("  • {}: {}", stat.location, format_duration(&stat.total)));
    }
    lines.push(format!("\n⌛ Total: {}", format_duration(&stats.total)));

    lines.join("\n")
}

/// Renders notes grouped by day as chat text.
pub fn render_notes(range: &DateRange, notes_by_date: &[(NaiveDate, Vec<Note>)]) -> String {
    if notes_by_date.is_empty() {
        return format!("📭 No notes for {}.", display_range(range));
    }

    let mut lines = vec![format!("📝 Notes {}", display_range(range))];
    for (date, day_notes) in notes_by_date {
        lines.push(format!("\n📅 {}:", calendar::format_display(*date)));
        for note in day_notes {
            // stored time is HH:MM:SS; seconds stay out of the chat view
            let time = note.time.get(..5).unwrap_or(&note.time);
            lines.push(format!("  • ({}) {}", time, note.text));
        }
    }

    lines.join("\n")
}

/// One attendance interval flattened for tabular export.
///
/// Open intervals use the same range-end cap as the text report, so both
/// surfaces agree on the hours column; the end cell carries an explicit
/// marker instead of a fabricated exit time.
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub location: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
}

pub fn flat_rows(stats: &AttendanceStats) -> Vec<ExportRow> {
    stats
        .rows
        .iter()
        .map(|row| ExportRow {
            location: row.interval.location.clone(),
            start: row.interval.start.format("%Y-%m-%d %H:%M").to_string(),
            end: match row.interval.end {
                Some(end) => end.format("%Y-%m-%d %H:%M").to_string(),
                None => format!("{} (open)", row.shown_end.format("%Y-%m-%d %H:%M")),
            },
            hours: format_hours(&row.duration),
        })
        .collect()
}

/// One note flattened for tabular export, date in the display calendar.
#[derive(Debug, Serialize)]
pub struct NoteRow {
    pub date: String,
    pub time: String,
    pub note: String,
}

pub fn note_rows(notes_by_date: &[(NaiveDate, Vec<Note>)]) -> Vec<NoteRow> {
    notes_by_date
        .iter()
        .flat_map(|(date, day_notes)| {
            day_notes.iter().map(|note| NoteRow {
                date: calendar::format_display(*date),
                time: note.time.clone(),
                note: note.text.clone(),
            })
        })
        .collect()
}
