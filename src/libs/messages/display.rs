//! Display implementation for taskdeck application messages.
//!
//! Central text formatting for all user-facing messages. Every string the
//! application prints lives here, including the fixed fallback strings the
//! store surfaces when the server rejects a request without an error body.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === FOLDER MESSAGES ===
            Message::FolderCreated(name) => format!("Folder '{}' created", name),
            Message::FolderDeleted(id) => format!("Folder {} deleted", id),
            Message::FoldersFetchFailed => "Failed to load folders".to_string(),
            Message::FolderCreateFailed => "Failed to create folder".to_string(),
            Message::FolderDeleteFailed => "Failed to delete folder".to_string(),
            Message::NoFoldersFound => "No folders yet. Create one with 'taskdeck folder create <name>'".to_string(),
            Message::FolderListHeader => "📁 Folders".to_string(),
            Message::ConfirmDeleteFolder(id) => format!("Delete folder {}? Tasks inside it become unreachable", id),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskStatusSet(id, status) => format!("Task {} moved to {}", id, status),
            Message::TaskPrioritySet(id, priority) => format!("Task {} priority set to {}", id, priority),
            Message::TaskProgressSet(id, progress) => format!("Task {} progress set to {}%", id, progress),
            Message::AssigneeToggled(user_id, task_id) => format!("Toggled user {} on task {}", user_id, task_id),
            Message::TasksFetchFailed => "Failed to load tasks".to_string(),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskUpdateFailed => "Failed to update task".to_string(),
            Message::TaskStatusUpdateFailed => "Failed to update task status".to_string(),
            Message::TaskPriorityUpdateFailed => "Failed to update task priority".to_string(),
            Message::TaskProgressUpdateFailed => "Failed to update task progress".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task".to_string(),
            Message::AssigneeToggleFailed => "Failed to update assignees".to_string(),
            Message::NoTasksInFolder(folder) => format!("No tasks in '{}'", folder),
            Message::TaskListHeader(folder) => format!("📋 Tasks in '{}'", folder),
            Message::AssignedTasksHeader => "📋 Tasks assigned to you".to_string(),
            Message::NoAssignedTasks => "No tasks assigned to you".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Delete task {}?", id),

            // === USER MESSAGES ===
            Message::UserCreated(username) => format!("User '{}' created", username),
            Message::UserDeleted(id) => format!("User {} deleted", id),
            Message::UsersFetchFailed => "Failed to load users".to_string(),
            Message::UserCreateFailed => "Failed to create user".to_string(),
            Message::UserDeleteFailed => "Failed to delete user".to_string(),
            Message::NoUsersFound => "No users found".to_string(),
            Message::UserListHeader => "👤 Users".to_string(),
            Message::AdminTasksHeader => "📋 All tasks".to_string(),
            Message::ConfirmDeleteUser(id) => format!("Delete user {}?", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotInitialized => "Server connection is not configured. Run 'taskdeck init' first".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::PromptServerApiUrl => "Enter the task service API URL".to_string(),
            Message::PromptServerUserId => "Enter your user id".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::NothingToExport => "Nothing to export".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
        };
        write!(f, "{}", text)
    }
}
