//! Note session engine.
//!
//! A per-user recording mode: while active, free-text messages become
//! timestamped notes for the current local date. The flag is a store row,
//! not process memory (see `db::note_sessions`).

use crate::db::note_sessions::NoteSessions;
use crate::db::notes::{Note, Notes};
use crate::libs::report::DateRange;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};

pub fn start_recording(user_id: i64) -> Result<()> {
    NoteSessions::new()?.set_active(user_id, true)
}

pub fn end_recording(user_id: i64) -> Result<()> {
    NoteSessions::new()?.set_active(user_id, false)
}

/// Idempotent reset used by the UI "start over" action.
pub fn restart(user_id: i64) -> Result<()> {
    NoteSessions::new()?.set_active(user_id, false)
}

pub fn is_recording(user_id: i64) -> Result<bool> {
    NoteSessions::new()?.is_active(user_id)
}

/// Appends a note when recording mode is active; returns `None` ("not
/// recording") otherwise.
pub fn record_if_active(user_id: i64, text: &str, now: DateTime<Local>) -> Result<Option<Note>> {
    if !NoteSessions::new()?.is_active(user_id)? {
        return Ok(None);
    }
    let note = Notes::new()?.append(user_id, now.date_naive(), &now.format("%H:%M:%S").to_string(), text)?;
    Ok(Some(note))
}

/// Notes in the range grouped by day, ascending.
pub fn notes_in_range(user_id: i64, range: &DateRange) -> Result<Vec<(NaiveDate, Vec<Note>)>> {
    let notes = Notes::new()?.fetch_range(user_id, range.start, range.end)?;

    let mut grouped: Vec<(NaiveDate, Vec<Note>)> = Vec::new();
    for note in notes {
        match grouped.last_mut() {
            Some((date, day_notes)) if *date == note.date => day_notes.push(note),
            _ => grouped.push((note.date, vec![note])),
        }
    }
    Ok(grouped)
}
