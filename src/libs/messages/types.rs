#[derive(Debug, Clone)]
pub enum Message {
    // === FOLDER MESSAGES ===
    FolderCreated(String),
    FolderDeleted(String),
    FoldersFetchFailed,
    FolderCreateFailed,
    FolderDeleteFailed,
    NoFoldersFound,
    FolderListHeader,
    ConfirmDeleteFolder(String),

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(String),
    TaskUpdated(String),
    TaskStatusSet(String, String),   // task id, status
    TaskPrioritySet(String, String), // task id, priority
    TaskProgressSet(String, u8),     // task id, progress
    AssigneeToggled(String, String), // user id, task id
    TasksFetchFailed,
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskStatusUpdateFailed,
    TaskPriorityUpdateFailed,
    TaskProgressUpdateFailed,
    TaskDeleteFailed,
    AssigneeToggleFailed,
    NoTasksInFolder(String),
    TaskListHeader(String),
    AssignedTasksHeader,
    NoAssignedTasks,
    ConfirmDeleteTask(String),

    // === USER MESSAGES ===
    UserCreated(String),
    UserDeleted(String),
    UsersFetchFailed,
    UserCreateFailed,
    UserDeleteFailed,
    NoUsersFound,
    UserListHeader,
    AdminTasksHeader,
    ConfirmDeleteUser(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotInitialized,
    ConfigModuleServer,
    PromptServerApiUrl,
    PromptServerUserId,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // file path
    NothingToExport,

    // === GENERIC MESSAGES ===
    OperationCancelled,
    NoChangesDetected,
}
