//! Data export command for external analysis and backup.
//!
//! Fetches one folder's task list and writes it to disk in the chosen
//! format. The output path defaults to a name derived from the folder id
//! and format in the current directory.

use crate::libs::export::{default_file_name, Exporter, ExportFormat};
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Folder whose tasks to export
    folder_id: String,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.fetch_tasks(&args.folder_id).await {
        msg_error!(err);
        return Ok(());
    }

    if store.tasks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| default_file_name(&args.folder_id, args.format));
    Exporter::new(&store.tasks).export(args.format, &path)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
