use crate::commands::{deliver, resolve_user};
use crate::libs::action::{self, Action, Response};
use crate::libs::calendar;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct CheckOutArgs {
    #[arg(required = true, help = "Location name (multiple words allowed)")]
    location: Vec<String>,
    #[arg(short, long, help = "Confirm an auto entry-and-exit without asking")]
    yes: bool,
    #[arg(short, long, help = "User id (defaults to the configured user)")]
    user: Option<i64>,
}

pub fn cmd(args: CheckOutArgs) -> Result<()> {
    let user = resolve_user(args.user)?;
    let location = args.location.join(" ");

    match action::dispatch(user, Action::Exit(location.clone()), calendar::now())? {
        // Nothing was open: the engine wants an explicit confirmation before
        // it writes a zero-length auto-closed record.
        Response::Prompt { message, .. } => {
            let confirmed = args.yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(message)
                    .default(false)
                    .interact()?;
            if confirmed {
                let response = action::dispatch(user, Action::ConfirmAutoEntry(location), calendar::now())?;
                deliver(response)?;
            }
            Ok(())
        }
        other => deliver(other),
    }
}
