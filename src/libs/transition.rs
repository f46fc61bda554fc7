//! Status lifecycle rules.
//!
//! Every status change in the application goes through [`can_transition`]:
//! the board, the `task edit` form and the `task start`/`complete` shortcuts
//! all share this one rule table.
//!
//! The lifecycle is forward-only and advances one stage at a time:
//!
//! ```text
//! Pending ──▶ InProgress ──▶ Completed
//! ```

use super::task::{Task, TaskStatus};
use thiserror::Error;

/// A rejected status change. Carries both ends so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot move task from '{current}' to '{requested}'")]
pub struct TransitionError {
    pub current: TaskStatus,
    pub requested: TaskStatus,
}

/// Returns whether a task in `current` may move to `requested`.
pub fn can_transition(current: TaskStatus, requested: TaskStatus) -> bool {
    matches!(
        (current, requested),
        (TaskStatus::Pending, TaskStatus::InProgress) | (TaskStatus::InProgress, TaskStatus::Completed)
    )
}

/// Returns a copy of `task` with `requested` as its status.
///
/// The input is only borrowed, so a rejected request leaves the caller's
/// task exactly as it was.
pub fn apply_transition(task: &Task, requested: TaskStatus) -> Result<Task, TransitionError> {
    if !can_transition(task.status, requested) {
        return Err(TransitionError {
            current: task.status,
            requested,
        });
    }

    let mut next = task.clone();
    next.status = requested;
    Ok(next)
}

/// Statuses a task in `current` may move to.
pub fn legal_targets(current: TaskStatus) -> Vec<TaskStatus> {
    TaskStatus::ALL
        .into_iter()
        .filter(|&target| can_transition(current, target))
        .collect()
}
