//! Engine boundary: transport-neutral actions and responses.
//!
//! The chat transport (or the CLI standing in for it) parses user input into
//! a closed `Action` and renders the returned `Response` with its own UI
//! primitives. Dispatch is an exhaustive match, so an unhandled action is a
//! compile error rather than a string silently falling through.
//!
//! User-correctable problems (bad date literal, unknown period) come back as
//! `Response::Text` guidance. Only infrastructure failures, storage above
//! all, surface as `Err`.

use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::engine::{self, CheckIn, CheckOut};
use crate::libs::export::TableRows;
use crate::libs::messages::{self, Message};
use crate::libs::notes;
use crate::libs::report::{self, DateRange, ReportPeriod};
use anyhow::Result;
use chrono::{DateTime, Local};

/// Date range selector of a report request.
#[derive(Debug, Clone)]
pub enum ReportRange {
    Period(ReportPeriod),
    /// Raw display-calendar literals, parsed at dispatch time.
    Custom { start: String, end: String },
}

#[derive(Debug, Clone, Copy)]
pub enum ReportKind {
    Attendance,
    Notes,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Table,
}

/// One user action delivered by the transport adapter.
#[derive(Debug)]
pub enum Action {
    StartSession,
    Entry(String),
    Exit(String),
    ConfirmAutoEntry(String),
    BeginNoteRecording,
    EndNoteRecording,
    FreeText(String),
    RequestReport {
        range: ReportRange,
        kind: ReportKind,
        format: OutputFormat,
    },
    Restart,
}

/// The engine's answer, rendered by the adapter's native UI.
#[derive(Debug)]
pub enum Response {
    Text(String),
    Table { rows: TableRows, filename_hint: String },
    Prompt { message: String, choices: Vec<String> },
}

/// Applies one user action. `now` is the single instant used for every
/// timestamp the action produces.
pub fn dispatch(user_id: i64, action: Action, now: DateTime<Local>) -> Result<Response> {
    let mut users = Users::new()?;
    users.ensure(user_id, None)?;

    match action {
        Action::StartSession => {
            let name = users.display_name(user_id)?.or(Config::read()?.display_name);
            Ok(Response::Text(Message::Greeting(name).to_string()))
        }

        Action::Entry(location) => match engine::check_in(user_id, &location, now)? {
            CheckIn::Opened(interval) => Ok(Response::Text(messages::success(Message::CheckedIn {
                location,
                time: report::display_datetime(&interval.start),
            }))),
            CheckIn::AlreadyOpen(open) => Ok(Response::Text(messages::warning(Message::EntryRejectedOpen {
                location,
                since: report::display_datetime(&open.start),
            }))),
        },

        Action::Exit(location) => match engine::check_out(user_id, &location, now)? {
            CheckOut::Closed { interval, duration } => Ok(Response::Text(messages::success(Message::CheckedOut {
                location,
                time: report::display_datetime(&interval.end.unwrap_or(now)),
                duration: crate::libs::formatter::format_duration(&duration),
            }))),
            CheckOut::ConfirmationRequired => Ok(Response::Prompt {
                message: Message::ConfirmAutoEntryPrompt(location).to_string(),
                choices: vec!["confirm".to_string(), "cancel".to_string()],
            }),
        },

        Action::ConfirmAutoEntry(location) => {
            let interval = engine::confirm_auto_entry(user_id, &location, now)?;
            Ok(Response::Text(messages::success(Message::AutoEntryRecorded {
                location,
                time: report::display_datetime(&interval.start),
            })))
        }

        Action::BeginNoteRecording => {
            notes::start_recording(user_id)?;
            Ok(Response::Text(messages::success(Message::NoteRecordingStarted)))
        }

        Action::EndNoteRecording => {
            notes::end_recording(user_id)?;
            Ok(Response::Text(messages::success(Message::NoteRecordingStopped)))
        }

        Action::FreeText(text) => match notes::record_if_active(user_id, &text, now)? {
            Some(note) => Ok(Response::Text(messages::success(Message::NoteSaved(
                crate::libs::calendar::format_display(note.date),
            )))),
            None => Ok(Response::Text(messages::info(Message::NotRecording))),
        },

        Action::RequestReport { range, kind, format } => {
            let range = match resolve_range(&range, now) {
                Ok(range) => range,
                Err(err) => return Ok(Response::Text(messages::error(Message::UserError(err.to_string())))),
            };
            build_report(user_id, &range, kind, format, now)
        }

        Action::Restart => {
            notes::restart(user_id)?;
            let name = users.display_name(user_id)?.or(Config::read()?.display_name);
            Ok(Response::Text(Message::Greeting(name).to_string()))
        }
    }
}

fn resolve_range(range: &ReportRange, now: DateTime<Local>) -> Result<DateRange, crate::libs::error::HozurError> {
    match range {
        ReportRange::Period(period) => Ok(report::period_range(*period, now.date_naive())),
        ReportRange::Custom { start, end } => report::custom_range(start, end),
    }
}

fn build_report(user_id: i64, range: &DateRange, kind: ReportKind, format: OutputFormat, now: DateTime<Local>) -> Result<Response> {
    let stamp = now.format("%Y-%m-%d");
    match kind {
        ReportKind::Attendance => {
            let stats = engine::range_stats(user_id, range, now, &Config::read()?.locations)?;
            match format {
                OutputFormat::Text => Ok(Response::Text(report::render_attendance(&stats))),
                OutputFormat::Table => Ok(Response::Table {
                    rows: TableRows::Attendance(report::flat_rows(&stats)),
                    filename_hint: format!("hozur_attendance_{}", stamp),
                }),
            }
        }
        ReportKind::Notes => {
            let grouped = notes::notes_in_range(user_id, range)?;
            match format {
                OutputFormat::Text => Ok(Response::Text(report::render_notes(range, &grouped))),
                OutputFormat::Table => Ok(Response::Table {
                    rows: TableRows::Notes(report::note_rows(&grouped)),
                    filename_hint: format!("hozur_notes_{}", stamp),
                }),
            }
        }
    }
}
