use crate::commands::{deliver, resolve_user};
use crate::libs::action::{self, Action};
use crate::libs::calendar;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    #[arg(short, long, help = "User id (defaults to the configured user)")]
    user: Option<i64>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let user = resolve_user(args.user)?;
    let response = action::dispatch(user, Action::StartSession, calendar::now())?;
    deliver(response)
}
