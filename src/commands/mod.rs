pub mod admin;
pub mod export;
pub mod folder;
pub mod init;
pub mod task;
pub mod user;

use crate::api::Server;
use crate::libs::config::Config;
use crate::libs::store::Store;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage task folders")]
    Folder(folder::FolderArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "List users")]
    User(user::UserArgs),
    #[command(about = "Administrative oversight of users and tasks")]
    Admin(admin::AdminArgs),
    #[command(about = "Export a folder's tasks to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        init_tracing();
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Folder(args) => folder::cmd(args).await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::User(args) => user::cmd(args).await,
            Commands::Admin(args) => admin::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Installs a tracing subscriber when debug mode is active, so the
/// message macros have somewhere to route their output.
fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Builds a store bound to the configured server connection.
pub(crate) fn open_store() -> Result<Store<Server>> {
    Ok(Store::new(open_server()?))
}

pub(crate) fn open_server() -> Result<Server> {
    let config = Config::read()?;
    Server::new(config.require_server()?)
}
