//! Client-side task filtering.
//!
//! A [`TaskFilter`] is rebuilt from the command line on every `task list`
//! call. It is sent to the service as query parameters and then applied again
//! locally, so the visible list follows these rules even when the service
//! ignores some parameters.
//!
//! All set fields must match (logical AND). Unset fields match everything.
//! Date bounds are inclusive and only ever match tasks that have a due date:
//! an undated task disappears as soon as either bound is set.

use super::task::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(rename = "searchQuery", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// True when no field narrows the list.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.search_text().is_none() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Returns the tasks that pass the filter, in their original order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|task| self.matches(task)).cloned().collect()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.matches_status(task) && self.matches_search(task) && self.matches_start(task) && self.matches_end(task)
    }

    fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|text| !text.is_empty())
    }

    fn matches_status(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| task.status == status)
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(needle) = self.search_text() else {
            return true;
        };
        let needle = needle.to_lowercase();

        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }

    fn matches_start(&self, task: &Task) -> bool {
        match self.start_date {
            None => true,
            Some(start) => task.due_date.is_some_and(|due| due >= start),
        }
    }

    fn matches_end(&self, task: &Task) -> bool {
        match self.end_date {
            None => true,
            Some(end) => task.due_date.is_some_and(|due| due <= end),
        }
    }
}
