//! CLI adapter: one subcommand per user action.
//!
//! Each command parses its arguments into a transport-neutral `Action`,
//! dispatches it through the engine boundary and renders the `Response`
//! with console primitives (plain text, prettytable, file export,
//! dialoguer confirmation).

pub mod check_in;
pub mod check_out;
pub mod init;
pub mod note;
pub mod report;
pub mod restart;
pub mod start;

use crate::libs::action::Response;
use crate::libs::config::Config;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Show the greeting and command overview")]
    Start(start::StartArgs),
    #[command(name = "in", about = "Record an entry at a location")]
    In(check_in::CheckInArgs),
    #[command(name = "out", about = "Record an exit from a location")]
    Out(check_out::CheckOutArgs),
    #[command(about = "Note recording and note entry")]
    Note(note::NoteArgs),
    #[command(about = "Attendance or notes report for a period or range")]
    Report(report::ReportArgs),
    #[command(about = "Reset the session state (stops note recording)")]
    Restart(restart::RestartArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Start(args) => start::cmd(args),
            Commands::In(args) => check_in::cmd(args),
            Commands::Out(args) => check_out::cmd(args),
            Commands::Note(args) => note::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Restart(args) => restart::cmd(args),
        }
    }
}

/// User id from the flag, or the configured default.
pub(crate) fn resolve_user(user: Option<i64>) -> Result<i64> {
    Ok(match user {
        Some(user) => user,
        None => Config::read()?.default_user,
    })
}

/// Default console rendering for responses that need no special handling.
pub(crate) fn deliver(response: Response) -> Result<()> {
    match response {
        Response::Text(text) => {
            msg_print!(text, true);
        }
        Response::Table { rows, .. } => View::table(&rows),
        Response::Prompt { message, .. } => {
            msg_print!(message, true);
        }
    }
    Ok(())
}
