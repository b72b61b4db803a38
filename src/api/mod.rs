//! Remote API layer for the task management service.
//!
//! The service exposes a plain CRUD interface over HTTP: a folder tree,
//! per-folder task lists, a user roster and a set of partial-update
//! endpoints for individual task fields. This module defines the
//! transport seam the client store depends on and the error type every
//! remote call produces.
//!
//! ## Design
//!
//! - **`Remote`**: one trait method per endpoint the store consumes.
//!   The HTTP implementation lives in [`server`]; tests substitute
//!   in-memory mocks.
//! - **`ApiError`**: distinguishes transport failure from a remote
//!   rejection, and preserves the server's error message when the
//!   response body carries one.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::api::{server::Server, Remote};
//! use taskdeck::libs::config::ServerConfig;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = ServerConfig {
//!     api_url: "https://tasks.example.com/api".to_string(),
//!     user_id: "u-42".to_string(),
//! };
//! let server = Server::new(&config)?;
//! let folders = server.folder_tree().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::folder::{Folder, NewFolder};
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task, TaskPatch, TaskStatus, Priority};
use crate::libs::user::User;
use reqwest::StatusCode;
use thiserror::Error;

pub mod server;

pub use server::Server;

/// Error produced by remote calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection, DNS, timeout or a
    /// malformed response body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` holds
    /// the `message` field of the JSON error body when one was present.
    #[error("{}", .message.as_deref().unwrap_or("request rejected by server"))]
    Remote { status: StatusCode, message: Option<String> },
}

impl ApiError {
    /// The literal server error message, if the response carried one.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ApiError::Remote { message: Some(m), .. } => Some(m),
            _ => None,
        }
    }

    /// The string shown to the user for this failure: the literal server
    /// message when available, otherwise the given fallback.
    pub fn surface(&self, fallback: Message) -> String {
        match self.remote_message() {
            Some(m) => m.to_string(),
            None => fallback.to_string(),
        }
    }
}

/// Transport dependency of the client store.
///
/// One method per remote operation the store issues. Implementations
/// perform exactly one request per call and do not retry; coordination
/// of overlapping calls is the caller's concern.
#[allow(async_fn_in_trait)]
pub trait Remote {
    /// GET /folders/tree — the complete folder forest.
    async fn folder_tree(&self) -> Result<Vec<Folder>, ApiError>;

    /// GET /tasks/folder/{id} — all tasks in one folder.
    async fn tasks_in_folder(&self, folder_id: &str) -> Result<Vec<Task>, ApiError>;

    /// GET /users — the full user roster.
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// POST /folders — create a folder, returning the created record.
    async fn create_folder(&self, folder: &NewFolder) -> Result<Folder, ApiError>;

    /// POST /tasks — create a task, returning the created record.
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;

    /// PATCH /tasks/{id}/status — returns the updated task.
    async fn set_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, ApiError>;

    /// PATCH /tasks/{id}/priority — returns the updated task.
    async fn set_task_priority(&self, task_id: &str, priority: Priority) -> Result<Task, ApiError>;

    /// PATCH /tasks/{id}/progress — returns the updated task.
    async fn set_task_progress(&self, task_id: &str, progress: u8) -> Result<Task, ApiError>;

    /// PATCH /tasks/{id} — partial title/description update, returns the
    /// updated task.
    async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> Result<Task, ApiError>;

    /// POST /tasks/{id}/assign/{userId} — toggles the user's membership
    /// on the task's assignee set.
    ///
    /// Returns the resulting membership when the server reports it. The
    /// current server answers with an empty body, in which case the
    /// caller has to derive the new membership itself.
    async fn toggle_assignee(&self, task_id: &str, user_id: &str) -> Result<Option<Vec<String>>, ApiError>;

    /// DELETE /folders/{id}.
    async fn delete_folder(&self, folder_id: &str) -> Result<(), ApiError>;

    /// DELETE /tasks/{id}.
    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError>;
}
