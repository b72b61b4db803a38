use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Option<UserCommand>,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// List all users
    List,
}

pub async fn cmd(args: UserArgs) -> Result<()> {
    match args.command {
        Some(UserCommand::List) | None => handle_list().await,
    }
}

async fn handle_list() -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.fetch_users().await {
        msg_error!(err);
        return Ok(());
    }

    if store.users.is_empty() {
        msg_info!(Message::NoUsersFound);
        return Ok(());
    }

    msg_print!(Message::UserListHeader, true);
    View::users(&store.users)
}
