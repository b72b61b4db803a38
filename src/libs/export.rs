//! Task list export for external analysis and backup.
//!
//! Writes the tasks of one folder to disk as CSV (flat rows for
//! spreadsheet tools) or JSON (the full wire shape, pretty-printed).

use crate::libs::task::Task;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per task.
    Csv,
    /// Pretty-printed JSON array of task records.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row shape used for CSV output. Dates render as ISO strings and
/// assignees collapse into one `;`-joined column.
#[derive(Debug, Serialize)]
struct TaskRow {
    id: String,
    title: String,
    status: String,
    priority: String,
    progress: u8,
    start_date: String,
    end_date: String,
    assignees: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        TaskRow {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            progress: task.progress,
            start_date: task.start_date.map(|d| d.to_string()).unwrap_or_default(),
            end_date: task.end_date.map(|d| d.to_string()).unwrap_or_default(),
            assignees: task.assignee_ids.join(";"),
        }
    }
}

pub struct Exporter<'a> {
    tasks: &'a [Task],
}

impl<'a> Exporter<'a> {
    pub fn new(tasks: &'a [Task]) -> Self {
        Self { tasks }
    }

    pub fn export(&self, format: ExportFormat, path: &Path) -> Result<()> {
        match format {
            ExportFormat::Csv => self.write_csv(path),
            ExportFormat::Json => self.write_json(path),
        }
    }

    fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for task in self.tasks {
            writer.serialize(TaskRow::from(task))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self.tasks)?;
        Ok(())
    }
}

/// Default output name when the user does not pick one.
pub fn default_file_name(folder_id: &str, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!("taskdeck_{}_tasks.{}", folder_id, format.extension()))
}
