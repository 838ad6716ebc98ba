use crate::commands::{deliver, resolve_user};
use crate::libs::action::{self, Action};
use crate::libs::calendar;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    action: NoteAction,
    #[arg(short, long, global = true, help = "User id (defaults to the configured user)")]
    user: Option<i64>,
}

#[derive(Debug, Subcommand)]
enum NoteAction {
    #[command(about = "Turn note recording on")]
    On,
    #[command(about = "Turn note recording off")]
    Off,
    #[command(about = "Save a note for today (requires recording to be on)")]
    Add {
        #[arg(required = true, help = "Note text")]
        text: Vec<String>,
    },
}

pub fn cmd(args: NoteArgs) -> Result<()> {
    let user = resolve_user(args.user)?;
    let action = match args.action {
        NoteAction::On => Action::BeginNoteRecording,
        NoteAction::Off => Action::EndNoteRecording,
        NoteAction::Add { text } => Action::FreeText(text.join(" ")),
    };
    let response = action::dispatch(user, action, calendar::now())?;
    deliver(response)
}
