//! Text for every [`Message`] variant.
//!
//! Keeping all wording in one `match` means a new variant cannot be added
//! without deciding how it reads.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskStatusChanged { title, status } => format!("Task '{}' is now {}", title, status),
            Message::TaskTransitionRejected { current, requested } => {
                format!("A task that is {} cannot be moved to {}", current, requested)
            }
            Message::TaskAlreadyCompleted(title) => format!("Task '{}' is already completed", title),
            Message::TasksHeader => "Tasks".to_string(),
            Message::TasksNotFound => "No tasks match the current filter".to_string(),
            Message::TasksVisibleCount { visible, total } => format!("Showing {} of {} tasks", visible, total),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::EditingTask(title) => format!("Editing task '{}'", title),

            // === TASK PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskDueDate => "Due date, YYYY-MM-DD (optional)".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::InvalidDueDate(raw) => format!("'{}' is not a valid date, expected YYYY-MM-DD", raw),

            // === AUTH MESSAGES ===
            Message::LoggedIn(email) => format!("Logged in as {}", email),
            Message::LoggedOut => "Logged out".to_string(),
            Message::Registered(email) => format!("Account {} registered", email),
            Message::NotLoggedIn => "You are not logged in. Run `taskman login` first".to_string(),
            Message::SessionExpired => "Your session has expired, please log in again".to_string(),
            Message::LoginFailed => "Login failed: wrong email or password".to_string(),
            Message::RegisterFailed(reason) => format!("Registration failed: {}", reason),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptName => "Name".to_string(),
            Message::PromptPasswordConfirm => "Repeat password".to_string(),
            Message::PasswordMismatch => "Passwords do not match".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleServer => "Task service settings".to_string(),
            Message::ConfigMissingServer => {
                "The task service is not configured. Run `taskman init` or set TASKMAN_API_URL".to_string()
            }
            Message::PromptServerApiUrl => "Task service API URL".to_string(),
            Message::PromptServerTimeout => "Request timeout (seconds)".to_string(),

            // === API MESSAGES ===
            Message::ApiRequestFailed(reason) => format!("Request to the task service failed: {}", reason),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
