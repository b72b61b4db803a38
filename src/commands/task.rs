use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Priority, TaskPatch, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// List the tasks in a folder
    List {
        /// Folder id
        folder_id: String,
    },
    /// List tasks assigned to you
    Assigned,
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Folder the task belongs to
        #[arg(short, long)]
        folder: String,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Initial status (server defaults to todo)
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
        /// Initial priority
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Initial progress
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        progress: Option<u8>,
    },
    /// Set a task's status
    Status {
        /// Task id
        id: String,
        #[arg(value_enum)]
        status: TaskStatus,
    },
    /// Set a task's priority
    Priority {
        /// Task id
        id: String,
        #[arg(value_enum)]
        priority: Priority,
    },
    /// Set a task's progress percentage
    Progress {
        /// Task id
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        progress: u8,
    },
    /// Edit a task's title or description
    Edit {
        /// Task id
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Toggle a user on a task's assignee set
    Assign {
        /// Task id
        task_id: String,
        /// User id to toggle
        user_id: String,
    },
    /// Delete a task
    Delete {
        /// Task id to delete
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::List { folder_id } => handle_list(folder_id).await,
        TaskCommand::Assigned => handle_assigned().await,
        TaskCommand::Create {
            title,
            folder,
            description,
            status,
            priority,
            start,
            end,
            progress,
        } => {
            let task = NewTask {
                title,
                description,
                folder_id: Some(folder),
                status,
                priority,
                start_date: start,
                end_date: end,
                progress,
            };
            handle_create(task).await
        }
        TaskCommand::Status { id, status } => handle_status(id, status).await,
        TaskCommand::Priority { id, priority } => handle_priority(id, priority).await,
        TaskCommand::Progress { id, progress } => handle_progress(id, progress).await,
        TaskCommand::Edit { id, title, description } => handle_edit(id, title, description).await,
        TaskCommand::Assign { task_id, user_id } => handle_assign(task_id, user_id).await,
        TaskCommand::Delete { id, yes } => handle_delete(id, yes).await,
    }
}

async fn handle_list(folder_id: String) -> Result<()> {
    let mut store = super::open_store()?;

    // The tree only supplies the header label; a failed tree fetch
    // falls back to the raw folder id.
    if let Err(err) = store.fetch_folders().await {
        msg_warning!(err);
    }
    if let Err(err) = store.fetch_tasks(&folder_id).await {
        msg_error!(err);
        return Ok(());
    }

    let name = store.folder_name(&folder_id).unwrap_or(&folder_id).to_string();
    if store.tasks.is_empty() {
        msg_info!(Message::NoTasksInFolder(name));
        return Ok(());
    }

    msg_print!(Message::TaskListHeader(name), true);
    View::tasks(&store.tasks)
}

async fn handle_assigned() -> Result<()> {
    let server = super::open_server()?;
    match server.assigned_tasks().await {
        Ok(tasks) if tasks.is_empty() => {
            msg_info!(Message::NoAssignedTasks);
            Ok(())
        }
        Ok(tasks) => {
            msg_print!(Message::AssignedTasksHeader, true);
            View::tasks(&tasks)
        }
        Err(err) => {
            msg_error!(err.surface(Message::TasksFetchFailed));
            Ok(())
        }
    }
}

async fn handle_create(task: NewTask) -> Result<()> {
    let title = task.title.clone();
    let mut store = super::open_store()?;
    if let Err(err) = store.create_task(task).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::TaskCreated(title));
    View::tasks(&store.tasks)
}

async fn handle_status(id: String, status: TaskStatus) -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.update_task_status(&id, status).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::TaskStatusSet(id, status.to_string()));
    Ok(())
}

async fn handle_priority(id: String, priority: Priority) -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.update_task_priority(&id, priority).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::TaskPrioritySet(id, priority.to_string()));
    Ok(())
}

async fn handle_progress(id: String, progress: u8) -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.update_task_progress(&id, progress).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::TaskProgressSet(id, progress));
    Ok(())
}

async fn handle_edit(id: String, title: Option<String>, description: Option<String>) -> Result<()> {
    if title.is_none() && description.is_none() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let patch = TaskPatch { title, description };
    let mut store = super::open_store()?;
    if let Err(err) = store.update_task(&id, patch).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

async fn handle_assign(task_id: String, user_id: String) -> Result<()> {
    let mut store = super::open_store()?;
    if let Err(err) = store.toggle_assignee(&task_id, &user_id).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::AssigneeToggled(user_id, task_id));
    Ok(())
}

async fn handle_delete(id: String, yes: bool) -> Result<()> {
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

    let mut store = super::open_store()?;
    if let Err(err) = store.delete_task(&id).await {
        msg_error!(err);
        return Ok(());
    }

    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
