use super::{ApiError, Remote};
use crate::libs::config::ServerConfig;
use crate::libs::folder::{Folder, NewFolder};
use crate::libs::task::{NewTask, Priority, Task, TaskPatch, TaskStatus};
use crate::libs::user::{NewUser, User};
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const FOLDERS_URL: &str = "folders";
const FOLDER_TREE_URL: &str = "folders/tree";
const TASKS_URL: &str = "tasks";
const USERS_URL: &str = "users";
const ADMIN_USERS_URL: &str = "admin/users";
const ADMIN_TASKS_URL: &str = "admin/tasks";

/// Identity header the service trusts in place of a session credential.
const USER_ID_HEADER: &str = "X-User-Id";

/// JSON error body the service attaches to rejected requests.
#[derive(Deserialize)]
struct RemoteMessage {
    message: Option<String>,
}

/// HTTP client for the task service.
///
/// Owns a connection-pooled `reqwest::Client` with the identity header
/// installed as a default header, so every request carries it without
/// per-call plumbing. Swapping the credential policy means swapping the
/// header set built in [`Server::new`].
#[derive(Debug)]
pub struct Server {
    client: Client,
    config: ServerConfig,
}

impl Server {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(&config.user_id)?);
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Turns a non-success response into `ApiError::Remote`, keeping the
    /// server's `message` field when the body parses as the error shape.
    async fn reject(res: Response) -> ApiError {
        let status = res.status();
        let message = res.json::<RemoteMessage>().await.ok().and_then(|body| body.message);
        ApiError::Remote { status, message }
    }

    async fn parse<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        if !res.status().is_success() {
            return Err(Self::reject(res).await);
        }
        Ok(res.json::<T>().await?)
    }

    async fn accept(res: Response) -> Result<(), ApiError> {
        if !res.status().is_success() {
            return Err(Self::reject(res).await);
        }
        Ok(())
    }

    // Administrative endpoints. These sit outside the store's transport
    // seam; the admin commands call them directly.

    /// GET /admin/users — every account on the service.
    pub async fn all_users(&self) -> Result<Vec<User>, ApiError> {
        let res = self.client.get(self.url(ADMIN_USERS_URL)).send().await?;
        Self::parse(res).await
    }

    /// GET /admin/tasks — every task across all folders.
    pub async fn all_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let res = self.client.get(self.url(ADMIN_TASKS_URL)).send().await?;
        Self::parse(res).await
    }

    /// POST /admin/users — create an account.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let res = self.client.post(self.url(ADMIN_USERS_URL)).json(user).send().await?;
        Self::parse(res).await
    }

    /// DELETE /admin/users/{id}.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", ADMIN_USERS_URL, user_id));
        let res = self.client.delete(url).send().await?;
        Self::accept(res).await
    }

    /// DELETE /admin/tasks/{id} — hard delete, unlike the soft delete of
    /// the regular task endpoint.
    pub async fn admin_delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", ADMIN_TASKS_URL, task_id));
        let res = self.client.delete(url).send().await?;
        Self::accept(res).await
    }

    /// GET /tasks/assigned — tasks assigned to the configured identity.
    pub async fn assigned_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.url(&format!("{}/assigned", TASKS_URL));
        let res = self.client.get(url).send().await?;
        Self::parse(res).await
    }
}

impl Remote for Server {
    async fn folder_tree(&self) -> Result<Vec<Folder>, ApiError> {
        let res = self.client.get(self.url(FOLDER_TREE_URL)).send().await?;
        Self::parse(res).await
    }

    async fn tasks_in_folder(&self, folder_id: &str) -> Result<Vec<Task>, ApiError> {
        let url = self.url(&format!("{}/folder/{}", TASKS_URL, folder_id));
        let res = self.client.get(url).send().await?;
        Self::parse(res).await
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        let res = self.client.get(self.url(USERS_URL)).send().await?;
        Self::parse(res).await
    }

    async fn create_folder(&self, folder: &NewFolder) -> Result<Folder, ApiError> {
        let res = self.client.post(self.url(FOLDERS_URL)).json(folder).send().await?;
        Self::parse(res).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let res = self.client.post(self.url(TASKS_URL)).json(task).send().await?;
        Self::parse(res).await
    }

    async fn set_task_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, ApiError> {
        let url = self.url(&format!("{}/{}/status?status={}", TASKS_URL, task_id, status));
        let res = self.client.patch(url).send().await?;
        Self::parse(res).await
    }

    async fn set_task_priority(&self, task_id: &str, priority: Priority) -> Result<Task, ApiError> {
        let url = self.url(&format!("{}/{}/priority?priority={}", TASKS_URL, task_id, priority));
        let res = self.client.patch(url).send().await?;
        Self::parse(res).await
    }

    async fn set_task_progress(&self, task_id: &str, progress: u8) -> Result<Task, ApiError> {
        let url = self.url(&format!("{}/{}/progress?progress={}", TASKS_URL, task_id, progress));
        let res = self.client.patch(url).send().await?;
        Self::parse(res).await
    }

    async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let url = self.url(&format!("{}/{}", TASKS_URL, task_id));
        let res = self.client.patch(url).json(patch).send().await?;
        Self::parse(res).await
    }

    async fn toggle_assignee(&self, task_id: &str, user_id: &str) -> Result<Option<Vec<String>>, ApiError> {
        let url = self.url(&format!("{}/{}/assign/{}", TASKS_URL, task_id, user_id));
        let res = self.client.post(url).send().await?;
        if !res.status().is_success() {
            return Err(Self::reject(res).await);
        }
        // The current server answers with an empty body; a membership
        // list in the response is adopted when present.
        Ok(res.json::<Vec<String>>().await.ok())
    }

    async fn delete_folder(&self, folder_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", FOLDERS_URL, folder_id));
        let res = self.client.delete(url).send().await?;
        Self::accept(res).await
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", TASKS_URL, task_id));
        let res = self.client.delete(url).send().await?;
        Self::accept(res).await
    }
}
