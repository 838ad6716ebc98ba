use crate::commands::{deliver, resolve_user};
use crate::libs::action::{self, Action, OutputFormat, ReportKind, ReportRange, Response};
use crate::libs::calendar;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::report;
use crate::libs::view::View;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(default_value = "daily", help = "Report period: daily, weekly or monthly")]
    period: String,
    #[arg(long, requires = "to", conflicts_with = "period", help = "Custom range start, Persian calendar YYYY-MM-DD")]
    from: Option<String>,
    #[arg(long, requires = "from", conflicts_with = "period", help = "Custom range end, Persian calendar YYYY-MM-DD")]
    to: Option<String>,
    #[arg(long, help = "Show notes instead of attendance")]
    notes: bool,
    #[arg(long, help = "Render as a table instead of text")]
    table: bool,
    #[arg(short, long, value_enum, help = "Export to a file instead of printing")]
    export: Option<ExportFormat>,
    #[arg(short, long, help = "Output file path for --export")]
    output: Option<PathBuf>,
    #[arg(short, long, help = "User id (defaults to the configured user)")]
    user: Option<i64>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let user = resolve_user(args.user)?;

    let range = match (&args.from, &args.to) {
        (Some(from), Some(to)) => ReportRange::Custom {
            start: from.clone(),
            end: to.clone(),
        },
        _ => match report::parse_period(&args.period) {
            Ok(period) => ReportRange::Period(period),
            Err(err) => {
                msg_error!(Message::UserError(err.to_string()));
                return Ok(());
            }
        },
    };
    let kind = if args.notes { ReportKind::Notes } else { ReportKind::Attendance };
    let format = if args.table || args.export.is_some() {
        OutputFormat::Table
    } else {
        OutputFormat::Text
    };

    let response = action::dispatch(user, Action::RequestReport { range, kind, format }, calendar::now())?;
    match response {
        Response::Table { rows, filename_hint } => {
            if let Some(export_format) = args.export {
                let path = Exporter::new(export_format, args.output).export(&rows, &filename_hint)?;
                msg_success!(Message::ExportedTo(path.display().to_string()));
            } else {
                View::table(&rows);
            }
            Ok(())
        }
        other => deliver(other),
    }
}
