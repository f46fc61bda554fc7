//! REST client for the `/tasks` resource.

use super::{ApiError, TaskStore};
use crate::libs::config::ServerConfig;
use crate::libs::filter::TaskFilter;
use crate::libs::http::Http;
use crate::libs::task::{due_date, NewTask, Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

const TASKS_URL: &str = "tasks";

/// Body of `PUT /tasks/{id}`: the full record without the server-managed timestamps.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskPayload<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    status: TaskStatus,
    #[serde(with = "due_date", skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
}

pub struct TasksApi {
    http: Http,
    token: String,
}

impl TasksApi {
    pub fn new(server: &ServerConfig, token: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            http: Http::new(server)?,
            token: token.into(),
        })
    }

    fn task_path(id: &str) -> String {
        format!("{}/{}", TASKS_URL, id)
    }
}

impl TaskStore for TasksApi {
    async fn create(&self, draft: &NewTask) -> Result<Task, ApiError> {
        tracing::debug!(title = draft.title(), "creating task");
        let request = Http::bearer(self.http.post(TASKS_URL), &self.token).json(draft);
        let res = Http::expect_success(request.send().await?).await?;
        Ok(res.json::<Task>().await?)
    }

    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
        tracing::debug!(?filter, "listing tasks");
        let request = Http::bearer(self.http.get(TASKS_URL), &self.token).query(filter);
        let res = Http::expect_success(request.send().await?).await?;
        Ok(res.json::<Vec<Task>>().await?)
    }

    async fn update(&self, task: &Task) -> Result<Task, ApiError> {
        let id = task.id.as_deref().ok_or(ApiError::MissingId)?;
        tracing::debug!(%id, status = task.status.as_str(), "updating task");

        let payload = TaskPayload {
            id,
            title: &task.title,
            description: task.description.as_deref(),
            status: task.status,
            due_date: task.due_date,
        };
        let request = Http::bearer(self.http.put(&Self::task_path(id)), &self.token).json(&payload);
        let res = Http::expect_success(request.send().await?).await?;
        Ok(res.json::<Task>().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(%id, "deleting task");
        let request = Http::bearer(self.http.delete(&Self::task_path(id)), &self.token);
        Http::expect_success(request.send().await?).await?;
        Ok(())
    }
}
