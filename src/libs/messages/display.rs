//! Display implementation for hozur application messages.
//!
//! All user-facing text is defined in one place so the transport adapter
//! (console today, a chat client elsewhere) renders consistent wording.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Greeting(name) => {
                let salutation = match name {
                    Some(name) => format!("Hi {} 👋", name),
                    None => "Hi 👋".to_string(),
                };
                format!(
                    "{}\n\nI track presence at locations and daily notes.\n\n\
                     Main commands:\n\
                     • in <location>   record an entry ✅\n\
                     • out <location>  record an exit ⛔\n\
                     • report daily|weekly|monthly   attendance report\n\
                     • note on|off     toggle note recording\n\
                     • report --notes  show notes",
                    salutation
                )
            }

            // === ATTENDANCE MESSAGES ===
            Message::CheckedIn { location, time } => {
                format!("Entry recorded.\n📍 Location: {}\n⏰ Time: {}", location, time)
            }
            Message::CheckedOut { location, time, duration } => {
                format!("Exit recorded.\n📍 Location: {}\n⏰ Time: {}\n⌛ Stayed: {}", location, time, duration)
            }
            Message::EntryRejectedOpen { location, since } => {
                format!(
                    "You are already checked in at {} (since {}).\nRecord an exit first with: out {}",
                    location, since, location
                )
            }
            Message::ConfirmAutoEntryPrompt(location) => {
                format!(
                    "No open entry found for {}.\nRecord an entry and exit at the current time instead?",
                    location
                )
            }
            Message::AutoEntryRecorded { location, time } => {
                format!("Entry and exit recorded at the same time.\n📍 Location: {}\n⏰ Time: {}", location, time)
            }

            // === NOTE MESSAGES ===
            Message::NoteRecordingStarted => "Note recording is on. Every message is saved as a note.".to_string(),
            Message::NoteRecordingStopped => "Note recording is off.".to_string(),
            Message::NoteSaved(date) => format!("Note saved for {}.", date),
            Message::NotRecording => "Not recording. Turn note recording on first.".to_string(),

            // === REPORT MESSAGES ===
            Message::ExportedTo(path) => format!("Report exported to: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptLocations => "Enter known locations (comma separated)".to_string(),
            Message::PromptDefaultUser => "Enter default user id".to_string(),
            Message::PromptDisplayName => "Enter display name (empty to skip)".to_string(),

            // === ERROR MESSAGES ===
            Message::UserError(text) => text.clone(),
            Message::StorageUnavailable => "Storage is unavailable right now, please try again later.".to_string(),
        };
        write!(f, "{}", text)
    }
}
