//! Administrative oversight commands.
//!
//! These talk to the admin endpoints directly rather than through the
//! store: they operate across all folders and accounts, not on the
//! currently selected view.

use crate::libs::messages::Message;
use crate::libs::user::{NewUser, Role};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Password};

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    command: AdminCommand,
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    /// List every user account
    Users,
    /// List every task across all folders
    Tasks,
    /// Create a user account
    CreateUser {
        /// Username for the new account
        username: String,
        /// Account role
        #[arg(short, long, value_enum, default_value = "user")]
        role: Role,
    },
    /// Delete a user account
    DeleteUser {
        /// User id to delete
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete a task from any folder
    DeleteTask {
        /// Task id to delete
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: AdminArgs) -> Result<()> {
    match args.command {
        AdminCommand::Users => handle_users().await,
        AdminCommand::Tasks => handle_tasks().await,
        AdminCommand::CreateUser { username, role } => handle_create_user(username, role).await,
        AdminCommand::DeleteUser { id, yes } => handle_delete_user(id, yes).await,
        AdminCommand::DeleteTask { id, yes } => handle_delete_task(id, yes).await,
    }
}

async fn handle_users() -> Result<()> {
    let server = super::open_server()?;
    match server.all_users().await {
        Ok(users) if users.is_empty() => {
            msg_info!(Message::NoUsersFound);
            Ok(())
        }
        Ok(users) => {
            msg_print!(Message::UserListHeader, true);
            View::users(&users)
        }
        Err(err) => {
            msg_error!(err.surface(Message::UsersFetchFailed));
            Ok(())
        }
    }
}

async fn handle_tasks() -> Result<()> {
    let server = super::open_server()?;
    match server.all_tasks().await {
        Ok(tasks) => {
            msg_print!(Message::AdminTasksHeader, true);
            View::tasks(&tasks)
        }
        Err(err) => {
            msg_error!(err.surface(Message::TasksFetchFailed));
            Ok(())
        }
    }
}

async fn handle_create_user(username: String, role: Role) -> Result<()> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Password for '{}'", username))
        .interact()?;

    let user = NewUser {
        username: username.clone(),
        password,
        role,
    };

    let server = super::open_server()?;
    if let Err(err) = server.create_user(&user).await {
        msg_error!(err.surface(Message::UserCreateFailed));
        return Ok(());
    }

    msg_success!(Message::UserCreated(username));
    Ok(())
}

async fn handle_delete_user(id: String, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteUser(id.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let server = super::open_server()?;
    if let Err(err) = server.delete_user(&id).await {
        msg_error!(err.surface(Message::UserDeleteFailed));
        return Ok(());
    }

    msg_success!(Message::UserDeleted(id));
    Ok(())
}

async fn handle_delete_task(id: String, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(id.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let server = super::open_server()?;
    if let Err(err) = server.admin_delete_task(&id).await {
        msg_error!(err.surface(Message::TaskDeleteFailed));
        return Ok(());
    }

    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
