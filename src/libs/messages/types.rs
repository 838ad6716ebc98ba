#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    Greeting(Option<String>),

    // === ATTENDANCE MESSAGES ===
    CheckedIn {
        location: String,
        time: String,
    },
    CheckedOut {
        location: String,
        time: String,
        duration: String,
    },
    EntryRejectedOpen {
        location: String,
        since: String,
    },
    ConfirmAutoEntryPrompt(String), // location
    AutoEntryRecorded {
        location: String,
        time: String,
    },

    // === NOTE MESSAGES ===
    NoteRecordingStarted,
    NoteRecordingStopped,
    NoteSaved(String), // display date
    NotRecording,

    // === REPORT MESSAGES ===
    ExportedTo(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptLocations,
    PromptDefaultUser,
    PromptDisplayName,

    // === ERROR MESSAGES ===
    UserError(String), // user-correctable, already formatted
    StorageUnavailable,
}
