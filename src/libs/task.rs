//! Task data model shared by the API client, the board and the views.
//!
//! Field names follow the remote service's JSON (camelCase). Due dates are
//! calendar dates; the service may send them either as `YYYY-MM-DD` or as a
//! full RFC 3339 timestamp, and only the date part is kept.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle stage of a task. Ordered: `Pending < InProgress < Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress", alias = "in_progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    /// Wire representation used by the task service.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == TaskStatus::Completed
    }

    /// The single status this one may advance to.
    pub fn next(self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Pending => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Completed),
            TaskStatus::Completed => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task status '{0}', expected one of: pending, in-progress, completed")]
pub struct ParseStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task title must not be empty")]
    EmptyTitle,
}

/// A task as known to the task service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, with = "due_date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Stamped by the service; `None` until the task is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an unsaved pending task.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Payload for creating a task. The status is always `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: TaskStatus,
    #[serde(with = "due_date", skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: &str) -> Result<Self, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
        })
    }

    /// Sets the description; blank text clears it.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// Serde helpers for optional calendar dates.
pub mod due_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse(raw).map(Some).map_err(serde::de::Error::custom),
        }
    }

    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, which is reduced to its UTC date.
    pub fn parse(raw: &str) -> Result<NaiveDate, String> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(|_| format!("invalid due date '{}'", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), json!("in-progress"));
        let legacy: TaskStatus = serde_json::from_value(json!("in_progress")).unwrap();
        assert_eq!(legacy, TaskStatus::InProgress);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Completed".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_label() {
        assert_eq!(TaskStatus::InProgress.to_string(), "In progress");
    }

    #[test]
    fn test_deserialize_timestamp_due_date() {
        let task: Task = serde_json::from_value(json!({
            "id": "abc",
            "title": "Buy milk",
            "status": "pending",
            "dueDate": "2024-01-10T00:00:00.000Z",
            "createdAt": "2024-01-01T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(task.description, None);
        assert_eq!(task.updated_at, None);
    }

    #[test]
    fn test_offset_timestamp_due_date_uses_utc_day() {
        assert_eq!(due_date::parse("2024-01-09T23:00:00-01:00"), Ok(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        assert_eq!(due_date::parse("2024-01-10T00:30:00+02:00"), Ok(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()));
    }

    #[test]
    fn test_missing_created_at_stays_unset() {
        let value = json!({ "id": "abc", "title": "Buy milk", "status": "pending" });

        let first: Task = serde_json::from_value(value.clone()).unwrap();
        let second: Task = serde_json::from_value(value).unwrap();

        assert_eq!(first.created_at, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_created_at_is_kept_from_service() {
        let task: Task = serde_json::from_value(json!({
            "id": "abc",
            "title": "Buy milk",
            "createdAt": "2024-01-01T08:00:00Z"
        }))
        .unwrap();

        let created = DateTime::parse_from_rfc3339("2024-01-01T08:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(task.created_at, Some(created));
        assert!(Task::new("Unsaved").created_at.is_none());
    }

    #[test]
    fn test_serialize_task_omits_missing_fields() {
        let task = Task::new("Ship release").with_due_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["dueDate"], json!("2024-02-01"));
        assert!(value.get("id").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_new_task_rejects_blank_title() {
        assert_eq!(NewTask::new("   "), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn test_new_task_is_pending() {
        let draft = NewTask::new(" Write docs ").unwrap().description(Some("".into()));
        assert_eq!(draft.title(), "Write docs");
        assert_eq!(draft.status(), TaskStatus::Pending);
        assert_eq!(draft.get_description(), None);
    }
}
