#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use taskdeck::api::{ApiError, Remote};
    use taskdeck::libs::folder::{Folder, NewFolder};
    use taskdeck::libs::store::{Store, StoreError};
    use taskdeck::libs::task::{NewTask, Priority, Task, TaskPatch, TaskStatus};
    use taskdeck::libs::user::User;

    /// In-memory stand-in for the remote service. Mutating endpoints
    /// work against a shared task table behind a mutex so consecutive
    /// calls observe each other, the way the real server would.
    struct MockRemote {
        folders: Vec<Folder>,
        tasks: Mutex<Vec<Task>>,
        /// When set, every call rejects with this body message.
        reject: Option<Option<String>>,
        /// Report the resulting membership from assignee toggles.
        membership_reply: bool,
        next_id: Mutex<u32>,
    }

    impl MockRemote {
        fn new() -> Self {
            MockRemote {
                folders: Vec::new(),
                tasks: Mutex::new(Vec::new()),
                reject: None,
                membership_reply: false,
                next_id: Mutex::new(1),
            }
        }

        fn with_folders(folders: Vec<Folder>) -> Self {
            MockRemote {
                folders,
                ..Self::new()
            }
        }

        fn failing(message: Option<&str>) -> Self {
            MockRemote {
                reject: Some(message.map(str::to_string)),
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            match &self.reject {
                Some(message) => Err(ApiError::Remote {
                    status: StatusCode::BAD_REQUEST,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }

        fn not_found() -> ApiError {
            ApiError::Remote {
                status: StatusCode::NOT_FOUND,
                message: Some("Task not found".to_string()),
            }
        }
    }

    impl Remote for MockRemote {
        async fn folder_tree(&self) -> Result<Vec<Folder>, ApiError> {
            self.check()?;
            Ok(self.folders.clone())
        }

        async fn tasks_in_folder(&self, folder_id: &str) -> Result<Vec<Task>, ApiError> {
            self.check()?;
            let tasks = self.tasks.lock().unwrap();
            Ok(tasks.iter().filter(|t| t.folder_id == folder_id).cloned().collect())
        }

        async fn users(&self) -> Result<Vec<User>, ApiError> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn create_folder(&self, folder: &NewFolder) -> Result<Folder, ApiError> {
            self.check()?;
            Ok(Folder {
                id: "f-new".to_string(),
                name: folder.name.clone(),
                user_id: None,
                parent_id: folder.parent_id.clone(),
                created_at: None,
                updated_at: None,
                children: Vec::new(),
            })
        }

        async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
            self.check()?;
            let mut next_id = self.next_id.lock().unwrap();
            let id = format!("t{}", *next_id);
            *next_id += 1;

            let created = Task {
                id,
                title: task.title.clone(),
                description: task.description.clone(),
                status: task.status.unwrap_or(TaskStatus::Todo),
                priority: task.priority.unwrap_or(Priority::Medium),
                folder_id: task.folder_id.clone().unwrap_or_default(),
                parent_task_id: None,
                creator_id: "u1".to_string(),
                start_date: task.start_date,
                end_date: task.end_date,
                progress: task.progress.unwrap_or(0).min(100),
                created_at: None,
                updated_at: None,
                assignee_ids: Vec::new(),
            };
            self.tasks.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn set_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, ApiError> {
            self.check()?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == task_id).ok_or_else(Self::not_found)?;
            task.status = status;
            Ok(task.clone())
        }

        async fn set_task_priority(&self, task_id: &str, priority: Priority) -> Result<Task, ApiError> {
            self.check()?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == task_id).ok_or_else(Self::not_found)?;
            task.priority = priority;
            Ok(task.clone())
        }

        async fn set_task_progress(&self, task_id: &str, progress: u8) -> Result<Task, ApiError> {
            self.check()?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == task_id).ok_or_else(Self::not_found)?;
            task.progress = progress.min(100);
            Ok(task.clone())
        }

        async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
            self.check()?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == task_id).ok_or_else(Self::not_found)?;
            if let Some(title) = patch.title.clone() {
                task.title = title;
            }
            if let Some(description) = patch.description.clone() {
                task.description = Some(description);
            }
            Ok(task.clone())
        }

        async fn toggle_assignee(&self, task_id: &str, user_id: &str) -> Result<Option<Vec<String>>, ApiError> {
            self.check()?;
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == task_id).ok_or_else(Self::not_found)?;
            match task.assignee_ids.iter().position(|id| id == user_id) {
                Some(pos) => {
                    task.assignee_ids.remove(pos);
                }
                None => task.assignee_ids.push(user_id.to_string()),
            }
            if self.membership_reply {
                Ok(Some(task.assignee_ids.clone()))
            } else {
                Ok(None)
            }
        }

        async fn delete_folder(&self, _folder_id: &str) -> Result<(), ApiError> {
            self.check()?;
            Ok(())
        }

        async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
            self.check()?;
            self.tasks.lock().unwrap().retain(|t| t.id != task_id);
            Ok(())
        }
    }

    fn folder(id: &str, name: &str, children: Vec<Folder>) -> Folder {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
            user_id: None,
            parent_id: None,
            created_at: None,
            updated_at: None,
            children,
        }
    }

    fn task(id: &str, folder_id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            folder_id: folder_id.to_string(),
            parent_task_id: None,
            creator_id: "u1".to_string(),
            start_date: None,
            end_date: None,
            progress: 0,
            created_at: None,
            updated_at: None,
            assignee_ids: Vec::new(),
        }
    }

    async fn seeded_store() -> Store<MockRemote> {
        let remote = MockRemote::new();
        let mut store = Store::new(remote);
        store.create_task(NewTask::new("Fix bug", Some("f1"))).await.unwrap();
        store.create_task(NewTask::new("Write docs", Some("f1"))).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_fetch_folders_replaces_forest_and_resolves_names() {
        let remote = MockRemote::with_folders(vec![folder("f1", "Sprint", vec![folder("f2", "Backlog", vec![])])]);
        let mut store = Store::new(remote);

        store.fetch_folders().await.unwrap();

        assert_eq!(store.folders.len(), 1);
        assert_eq!(store.folder_name("f2"), Some("Backlog"));
        assert_eq!(store.folder_name("missing"), None);
        assert!(!store.loading);
    }

    #[tokio::test]
    async fn test_create_task_then_fetch_yields_created_task() {
        let mut store = Store::new(MockRemote::new());

        let mut new_task = NewTask::new("Fix bug", Some("f1"));
        new_task.status = Some(TaskStatus::Todo);
        store.create_task(new_task).await.unwrap();

        assert_eq!(store.tasks.len(), 1);
        assert_eq!(store.tasks[0].title, "Fix bug");
        assert_eq!(store.tasks[0].status, TaskStatus::Todo);
        assert_eq!(store.tasks[0].folder_id, "f1");
    }

    #[tokio::test]
    async fn test_fetch_tasks_holds_one_folder_at_a_time() {
        let mut store = Store::new(MockRemote::new());
        store.create_task(NewTask::new("In f1", Some("f1"))).await.unwrap();
        store.create_task(NewTask::new("In f2", Some("f2"))).await.unwrap();

        store.fetch_tasks("f1").await.unwrap();
        assert_eq!(store.tasks.len(), 1);
        assert_eq!(store.tasks[0].title, "In f1");

        // Switching folders discards the previous list.
        store.fetch_tasks("f2").await.unwrap();
        assert_eq!(store.tasks.len(), 1);
        assert_eq!(store.tasks[0].title, "In f2");
    }

    #[tokio::test]
    async fn test_status_update_touches_only_target_task() {
        let mut store = seeded_store().await;
        let target = store.tasks[0].id.clone();
        let other_title = store.tasks[1].title.clone();

        store.update_task_status(&target, TaskStatus::Done).await.unwrap();

        assert_eq!(store.tasks[0].status, TaskStatus::Done);
        assert_eq!(store.tasks[0].title, "Fix bug");
        assert_eq!(store.tasks[0].priority, Priority::Medium);
        assert_eq!(store.tasks[1].status, TaskStatus::Todo);
        assert_eq!(store.tasks[1].title, other_title);
    }

    #[tokio::test]
    async fn test_delete_task_removes_exactly_one() {
        let mut store = seeded_store().await;
        let doomed = store.tasks[0].id.clone();
        let survivor = store.tasks[1].id.clone();

        store.delete_task(&doomed).await.unwrap();

        assert_eq!(store.tasks.len(), 1);
        assert_eq!(store.tasks[0].id, survivor);
    }

    #[tokio::test]
    async fn test_toggle_assignee_twice_is_involution() {
        let mut store = seeded_store().await;
        let target = store.tasks[0].id.clone();

        store.toggle_assignee(&target, "u2").await.unwrap();
        assert_eq!(store.tasks[0].assignee_ids, vec!["u2".to_string()]);

        store.toggle_assignee(&target, "u2").await.unwrap();
        assert!(store.tasks[0].assignee_ids.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_adopts_server_reported_membership() {
        let remote = MockRemote {
            membership_reply: true,
            ..MockRemote::new()
        };
        let mut store = Store::new(remote);
        store.create_task(NewTask::new("Fix bug", Some("f1"))).await.unwrap();
        let target = store.tasks[0].id.clone();

        store.toggle_assignee(&target, "u2").await.unwrap();

        assert_eq!(store.tasks[0].assignee_ids, vec!["u2".to_string()]);
    }

    #[tokio::test]
    async fn test_progress_is_clamped_to_valid_range() {
        let mut store = seeded_store().await;
        let target = store.tasks[0].id.clone();

        store.update_task_progress(&target, 250).await.unwrap();
        assert_eq!(store.tasks[0].progress, 100);

        store.update_task_progress(&target, 0).await.unwrap();
        assert_eq!(store.tasks[0].progress, 0);

        store.update_task_progress(&target, 100).await.unwrap();
        assert_eq!(store.tasks[0].progress, 100);
    }

    #[tokio::test]
    async fn test_rejected_create_folder_surfaces_server_message() {
        let mut store = Store::new(MockRemote::failing(Some("Name required")));

        let err = store.create_folder("", None).await.unwrap_err();

        assert_eq!(err.to_string(), "Name required");
        assert!(store.folders.is_empty());
        assert_eq!(store.last_error.as_deref(), Some("Name required"));
    }

    #[tokio::test]
    async fn test_rejection_without_body_falls_back_to_fixed_message() {
        let mut store = Store::new(MockRemote::failing(None));

        let err = store.fetch_folders().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to load folders");
        assert!(!store.loading);
    }

    #[tokio::test]
    async fn test_rejected_status_update_rolls_back_local_patch() {
        let mut store = Store::new(MockRemote::failing(None));
        store.tasks = vec![task("t1", "f1", "Fix bug")];

        let err: StoreError = store.update_task_status("t1", TaskStatus::Done).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to update task status");
        assert_eq!(store.tasks[0].status, TaskStatus::Todo);
    }

    #[tokio::test]
    async fn test_rejected_toggle_rolls_back_membership() {
        let mut store = Store::new(MockRemote::failing(None));
        let mut seeded = task("t1", "f1", "Fix bug");
        seeded.assignee_ids.push("u2".to_string());
        store.tasks = vec![seeded];

        store.toggle_assignee("t1", "u2").await.unwrap_err();

        assert_eq!(store.tasks[0].assignee_ids, vec!["u2".to_string()]);
    }

    #[tokio::test]
    async fn test_edit_updates_title_and_description() {
        let mut store = seeded_store().await;
        let target = store.tasks[0].id.clone();

        let patch = TaskPatch {
            title: Some("Fix the bug".to_string()),
            description: Some("Repro steps attached".to_string()),
        };
        store.update_task(&target, patch).await.unwrap();

        assert_eq!(store.tasks[0].title, "Fix the bug");
        assert_eq!(store.tasks[0].description.as_deref(), Some("Repro steps attached"));
        assert_eq!(store.tasks[1].title, "Write docs");
    }
}
