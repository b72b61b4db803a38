use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct FolderArgs {
    #[command(subcommand)]
    command: FolderCommand,
}

#[derive(Debug, Subcommand)]
enum FolderCommand {
    /// List the folder tree
    List,
    /// Create a new folder
    Create {
        /// Folder name
        name: String,
        /// Parent folder id for a nested folder
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Delete a folder
    Delete {
        /// Folder id to delete
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: FolderArgs) -> Result<()> {
    match args.command {
        FolderCommand::List => handle_list().await,
        FolderCommand::Create { name, parent } => handle_create(name, parent).await,
        FolderCommand::Delete { id, yes } => handle_delete(id, yes).await,
    }
}

async fn handle_list() -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.fetch_folders().await {
        msg_error!(err);
        return Ok(());
    }

    if store.folders.is_empty() {
        msg_info!(Message::NoFoldersFound);
        return Ok(());
    }

    msg_print!(Message::FolderListHeader, true);
    View::folders(&store.folders)
}

async fn handle_create(name: String, parent: Option<String>) -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.create_folder(&name, parent.as_deref()).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::FolderCreated(name));
    View::folders(&store.folders)
}

async fn handle_delete(id: String, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteFolder(id.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut store = super::open_store()?;
    if let Err(err) = store.delete_folder(&id).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::FolderDeleted(id));
    Ok(())
}
