//! Client-side store for folders, tasks and users.
//!
//! The store is the single source of truth for everything the client
//! shows: the folder forest, the task list of the currently selected
//! folder, and the user roster. All mutation flows through its methods,
//! each of which issues exactly one remote call and keeps the local copy
//! consistent with the outcome.
//!
//! ## Ownership and concurrency
//!
//! The store owns its state and its transport. Methods take `&mut self`,
//! so the borrow checker enforces the single-writer property; the only
//! suspension point inside any operation is the await on the remote
//! call. Overlapping calls against the same task are not coordinated
//! beyond that.
//!
//! ## Write lifecycle
//!
//! Partial task updates follow an explicit pending → confirmed /
//! rolled-back transition:
//!
//! 1. the prior task value is snapshotted and the patch applied locally
//! 2. the remote call is awaited
//! 3. on success the server's returned record replaces the local entry;
//!    on rejection the snapshot is restored
//!
//! A failed write therefore never leaves stale local state behind.
//! Creations and folder deletions skip the local patch entirely and
//! re-fetch from the server instead, which avoids guessing ids or
//! ordering.
//!
//! ## Failure surface
//!
//! Every failure produces one user-facing string: the literal server
//! error message when the response body carried one, otherwise a fixed
//! per-operation fallback. The message is recorded in `last_error` and
//! returned as a [`StoreError`]; operations are never retried.

use crate::api::{ApiError, Remote};
use crate::libs::folder::{find_folder, Folder, NewFolder};
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Priority, Task, TaskPatch, TaskStatus};
use crate::libs::user::User;
use crate::msg_debug;
use thiserror::Error;

/// User-facing failure of a store operation. Carries the surfaced
/// message and nothing else; callers display it and move on.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// In-memory mirror of the server state visible to the client, bound to
/// an injected transport.
pub struct Store<R: Remote> {
    remote: R,
    /// The complete folder forest, replaced wholesale on every fetch.
    pub folders: Vec<Folder>,
    /// Tasks of the most recently fetched folder. Switching folders
    /// discards the previous list; this is not a global task cache.
    pub tasks: Vec<Task>,
    /// The full user roster, used for assignee selection.
    pub users: Vec<User>,
    /// True while a fetch is in flight. Mutations do not drive this.
    pub loading: bool,
    /// Message of the most recent failure, if any.
    pub last_error: Option<String>,
}

impl<R: Remote> Store<R> {
    pub fn new(remote: R) -> Self {
        Store {
            remote,
            folders: Vec::new(),
            tasks: Vec::new(),
            users: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    /// Resolves a folder's display name through the tree lookup.
    pub fn folder_name(&self, folder_id: &str) -> Option<&str> {
        find_folder(&self.folders, folder_id).map(|folder| folder.name.as_str())
    }

    /// Replaces the folder forest with the server's current tree.
    pub async fn fetch_folders(&mut self) -> Result<(), StoreError> {
        self.loading = true;
        let result = self.remote.folder_tree().await;
        self.loading = false;
        match result {
            Ok(folders) => {
                self.folders = folders;
                Ok(())
            }
            Err(err) => Err(self.surface(err, Message::FoldersFetchFailed)),
        }
    }

    /// Replaces the task list with the tasks of one folder.
    pub async fn fetch_tasks(&mut self, folder_id: &str) -> Result<(), StoreError> {
        self.loading = true;
        let result = self.remote.tasks_in_folder(folder_id).await;
        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            Err(err) => Err(self.surface(err, Message::TasksFetchFailed)),
        }
    }

    /// Replaces the user roster.
    pub async fn fetch_users(&mut self) -> Result<(), StoreError> {
        match self.remote.users().await {
            Ok(users) => {
                self.users = users;
                Ok(())
            }
            Err(err) => Err(self.surface(err, Message::UsersFetchFailed)),
        }
    }

    /// Creates a folder, then re-fetches the whole tree. No optimistic
    /// insert: the server owns ids and sibling ordering.
    pub async fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<(), StoreError> {
        let folder = NewFolder::new(name, parent_id);
        if let Err(err) = self.remote.create_folder(&folder).await {
            return Err(self.surface(err, Message::FolderCreateFailed));
        }
        self.fetch_folders().await
    }

    /// Creates a task; when the task names a folder, re-fetches that
    /// folder's task list so the new record appears with server ids.
    pub async fn create_task(&mut self, task: NewTask) -> Result<(), StoreError> {
        let folder_id = task.folder_id.clone();
        if let Err(err) = self.remote.create_task(&task).await {
            return Err(self.surface(err, Message::TaskCreateFailed));
        }
        match folder_id {
            Some(folder_id) => self.fetch_tasks(&folder_id).await,
            None => Ok(()),
        }
    }

    pub async fn update_task_status(&mut self, task_id: &str, status: TaskStatus) -> Result<(), StoreError> {
        let snapshot = self.apply(task_id, |task| task.status = status);
        match self.remote.set_task_status(task_id, status).await {
            Ok(updated) => {
                self.confirm(task_id, updated);
                Ok(())
            }
            Err(err) => {
                self.rollback(snapshot);
                Err(self.surface(err, Message::TaskStatusUpdateFailed))
            }
        }
    }

    pub async fn update_task_priority(&mut self, task_id: &str, priority: Priority) -> Result<(), StoreError> {
        let snapshot = self.apply(task_id, |task| task.priority = priority);
        match self.remote.set_task_priority(task_id, priority).await {
            Ok(updated) => {
                self.confirm(task_id, updated);
                Ok(())
            }
            Err(err) => {
                self.rollback(snapshot);
                Err(self.surface(err, Message::TaskPriorityUpdateFailed))
            }
        }
    }

    /// Progress is clamped to 0..=100 before it leaves the client.
    pub async fn update_task_progress(&mut self, task_id: &str, progress: u8) -> Result<(), StoreError> {
        let progress = progress.min(100);
        let snapshot = self.apply(task_id, |task| task.progress = progress);
        match self.remote.set_task_progress(task_id, progress).await {
            Ok(updated) => {
                self.confirm(task_id, updated);
                Ok(())
            }
            Err(err) => {
                self.rollback(snapshot);
                Err(self.surface(err, Message::TaskProgressUpdateFailed))
            }
        }
    }

    /// Partial title/description update.
    pub async fn update_task(&mut self, task_id: &str, patch: TaskPatch) -> Result<(), StoreError> {
        let snapshot = self.apply(task_id, |task| {
            if let Some(title) = patch.title.clone() {
                task.title = title;
            }
            if let Some(description) = patch.description.clone() {
                task.description = Some(description);
            }
        });
        match self.remote.update_task(task_id, &patch).await {
            Ok(updated) => {
                self.confirm(task_id, updated);
                Ok(())
            }
            Err(err) => {
                self.rollback(snapshot);
                Err(self.surface(err, Message::TaskUpdateFailed))
            }
        }
    }

    /// Toggles a user's membership on a task's assignee set.
    ///
    /// The local set is flipped by presence (present → remove, absent →
    /// add). When the server reports the resulting membership, that
    /// answer replaces the local guess, so the two cannot drift apart
    /// even if the server's toggle semantics change.
    pub async fn toggle_assignee(&mut self, task_id: &str, user_id: &str) -> Result<(), StoreError> {
        let snapshot = self.apply(task_id, |task| {
            match task.assignee_ids.iter().position(|id| id == user_id) {
                Some(pos) => {
                    task.assignee_ids.remove(pos);
                }
                None => task.assignee_ids.push(user_id.to_string()),
            }
        });
        match self.remote.toggle_assignee(task_id, user_id).await {
            Ok(Some(membership)) => {
                if let Some(pos) = self.position(task_id) {
                    self.tasks[pos].assignee_ids = membership;
                }
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                self.rollback(snapshot);
                Err(self.surface(err, Message::AssigneeToggleFailed))
            }
        }
    }

    /// Deletes a folder, then re-fetches the whole tree.
    pub async fn delete_folder(&mut self, folder_id: &str) -> Result<(), StoreError> {
        if let Err(err) = self.remote.delete_folder(folder_id).await {
            return Err(self.surface(err, Message::FolderDeleteFailed));
        }
        self.fetch_folders().await
    }

    /// Deletes a task and filters exactly that id out of the local list.
    pub async fn delete_task(&mut self, task_id: &str) -> Result<(), StoreError> {
        if let Err(err) = self.remote.delete_task(task_id).await {
            return Err(self.surface(err, Message::TaskDeleteFailed));
        }
        self.tasks.retain(|task| task.id != task_id);
        Ok(())
    }

    fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }

    /// Applies a local patch to the matching task and returns the prior
    /// value for rollback. A task outside the currently loaded folder is
    /// not in the list; the remote call still proceeds and the local
    /// list stays untouched.
    fn apply<F: FnOnce(&mut Task)>(&mut self, task_id: &str, patch: F) -> Option<Task> {
        let pos = self.position(task_id)?;
        let snapshot = self.tasks[pos].clone();
        patch(&mut self.tasks[pos]);
        Some(snapshot)
    }

    /// Adopts the server's record for a confirmed write.
    fn confirm(&mut self, task_id: &str, updated: Task) {
        if let Some(pos) = self.position(task_id) {
            self.tasks[pos] = updated;
        }
    }

    /// Restores the snapshotted value after a rejected write.
    fn rollback(&mut self, snapshot: Option<Task>) {
        if let Some(prev) = snapshot {
            if let Some(pos) = self.position(&prev.id) {
                self.tasks[pos] = prev;
            }
        }
    }

    fn surface(&mut self, err: ApiError, fallback: Message) -> StoreError {
        msg_debug!(format!("remote call failed: {:?}", err));
        let message = err.surface(fallback);
        self.last_error = Some(message.clone());
        StoreError(message)
    }
}
