use crate::commands::{deliver, resolve_user};
use crate::libs::action::{self, Action};
use crate::libs::calendar;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RestartArgs {
    #[arg(short, long, help = "User id (defaults to the configured user)")]
    user: Option<i64>,
}

pub fn cmd(args: RestartArgs) -> Result<()> {
    let user = resolve_user(args.user)?;
    let response = action::dispatch(user, Action::Restart, calendar::now())?;
    deliver(response)
}
