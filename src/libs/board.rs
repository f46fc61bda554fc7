//! The client's in-memory view of the task list.
//!
//! [`TaskBoard`] is the only owner of the cached tasks and of the current
//! filter. Commands open a board, let it talk to a [`TaskStore`], and render
//! what it returns.
//!
//! ## Reconciliation
//!
//! The cache is reconciled from [`TaskStore`] results only. Every mutation
//! goes to the store first, and the local copy changes only after the store
//! confirms:
//!
//! ```text
//! transition(id, status)
//!     │
//!     ├─ apply_transition ── rejected ──▶ BoardError::Transition (store untouched)
//!     │
//!     ├─ store.update ────── failed ────▶ BoardError::Store (cache untouched)
//!     │
//!     └─ confirmed record replaces the cached one
//! ```
//!
//! ## Operations
//!
//! - **`refresh` / `set_filter`**: reload with the filter as query parameters
//! - **`visible`**: re-apply the filter locally over the cache
//! - **`create`**: new tasks always start as `Pending`
//! - **`update`**: whole-record edit; a changed status must be a legal transition
//! - **`transition`**: status-only change through the lifecycle rules
//! - **`delete`**: removed locally once the service confirms

use super::filter::TaskFilter;
use super::task::{NewTask, Task, TaskStatus};
use super::transition::{apply_transition, can_transition, TransitionError};
use crate::api::{ApiError, TaskStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Store(#[from] ApiError),

    #[error("Task with ID {0} not found")]
    NotFound(String),
}

pub struct TaskBoard<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    filter: TaskFilter,
}

impl<S: TaskStore> TaskBoard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            filter: TaskFilter::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Every cached task, regardless of the filter.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Cached tasks that pass the current filter, in service order.
    pub fn visible(&self) -> Vec<Task> {
        self.filter.apply(&self.tasks)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id.as_deref() == Some(id))
    }

    /// Reloads the cache from the store using the current filter.
    pub async fn refresh(&mut self) -> Result<(), BoardError> {
        self.tasks = self.store.list(&self.filter).await?;
        Ok(())
    }

    /// Replaces the filter and reloads.
    pub async fn set_filter(&mut self, filter: TaskFilter) -> Result<(), BoardError> {
        self.filter = filter;
        self.refresh().await
    }

    pub async fn create(&mut self, draft: NewTask) -> Result<Task, BoardError> {
        let created = self.store.create(&draft).await?;
        self.tasks.push(created.clone());
        Ok(created)
    }

    /// Saves a whole-record edit.
    ///
    /// A changed status must be a legal transition from the cached one. Other
    /// fields may be edited at any stage, including after completion.
    pub async fn update(&mut self, task: Task) -> Result<Task, BoardError> {
        let id = task.id.clone().ok_or(BoardError::Store(ApiError::MissingId))?;
        let index = self.position(&id)?;

        let current = self.tasks[index].status;
        if task.status != current && !can_transition(current, task.status) {
            return Err(TransitionError {
                current,
                requested: task.status,
            }
            .into());
        }

        let saved = self.store.update(&task).await?;
        self.tasks[index] = saved.clone();
        Ok(saved)
    }

    /// Moves a task to `status` if the lifecycle allows it.
    pub async fn transition(&mut self, id: &str, status: TaskStatus) -> Result<Task, BoardError> {
        let index = self.position(id)?;
        let next = apply_transition(&self.tasks[index], status)?;

        let saved = self.store.update(&next).await?;
        self.tasks[index] = saved.clone();
        Ok(saved)
    }

    pub async fn delete(&mut self, id: &str) -> Result<Task, BoardError> {
        let index = self.position(id)?;
        self.store.delete(id).await?;
        Ok(self.tasks.remove(index))
    }

    fn position(&self, id: &str) -> Result<usize, BoardError> {
        self.tasks
            .iter()
            .position(|task| task.id.as_deref() == Some(id))
            .ok_or_else(|| BoardError::NotFound(id.to_string()))
    }
}
