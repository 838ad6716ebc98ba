use crate::commands::{deliver, resolve_user};
use crate::libs::action::{self, Action};
use crate::libs::calendar;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckInArgs {
    #[arg(required = true, help = "Location name (multiple words allowed)")]
    location: Vec<String>,
    #[arg(short, long, help = "User id (defaults to the configured user)")]
    user: Option<i64>,
}

pub fn cmd(args: CheckInArgs) -> Result<()> {
    let user = resolve_user(args.user)?;
    let response = action::dispatch(user, Action::Entry(args.location.join(" ")), calendar::now())?;
    deliver(response)
}
