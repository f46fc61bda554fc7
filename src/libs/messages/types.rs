/// Every user-facing message the application prints.
///
/// Text lives in `display.rs`; call sites only pick a variant.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskStatusChanged { title: String, status: String },
    TaskTransitionRejected { current: String, requested: String },
    TaskAlreadyCompleted(String),
    TasksHeader,
    TasksNotFound,
    TasksVisibleCount { visible: usize, total: usize },
    NoChangesDetected,
    ConfirmDeleteTask(String),
    EditingTask(String),

    // === TASK PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskStatus,
    InvalidDueDate(String),

    // === AUTH MESSAGES ===
    LoggedIn(String),
    LoggedOut,
    Registered(String),
    NotLoggedIn,
    SessionExpired,
    LoginFailed,
    RegisterFailed(String),
    WrongPassword(i32),
    PromptEmail,
    PromptPassword,
    PromptName,
    PromptPasswordConfirm,
    PasswordMismatch,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigMissingServer,
    PromptServerApiUrl,
    PromptServerTimeout,

    // === API MESSAGES ===
    ApiRequestFailed(String),

    // === GENERAL ===
    OperationCancelled,
}
