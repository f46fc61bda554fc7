#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use taskman::api::{ApiError, TaskStore, TasksApi};
    use taskman::libs::config::ServerConfig;
    use taskman::libs::filter::TaskFilter;
    use taskman::libs::task::{NewTask, Task, TaskStatus};
    use test_context::{test_context, AsyncTestContext};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "token-abc";

    struct TasksApiContext {
        server: MockServer,
        api: TasksApi,
    }

    impl AsyncTestContext for TasksApiContext {
        async fn setup() -> Self {
            let server = MockServer::start().await;
            let api = TasksApi::new(&ServerConfig::new(server.uri()), TOKEN).unwrap();
            TasksApiContext { server, api }
        }
    }

    fn record(id: &str, title: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "status": status,
            "createdAt": "2024-01-01T09:00:00Z"
        })
    }

    #[test_context(TasksApiContext)]
    #[tokio::test]
    async fn test_list_sends_filter_as_query(ctx: &mut TasksApiContext) {
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .and(header("authorization", "Bearer token-abc"))
            .and(query_param("status", "in-progress"))
            .and(query_param("searchQuery", "ship"))
            .and(query_param("startDate", "2024-01-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([record("2", "Ship release", "in_progress")])))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let filter = TaskFilter::new()
            .status(TaskStatus::InProgress)
            .search("ship")
            .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let tasks = ctx.api.list(&filter).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
    }

    #[test_context(TasksApiContext)]
    #[tokio::test]
    async fn test_create_posts_pending_draft(ctx: &mut TasksApiContext) {
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(body_json(json!({
                "title": "Buy milk",
                "status": "pending",
                "dueDate": "2024-01-10"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "1",
                "title": "Buy milk",
                "status": "pending",
                "dueDate": "2024-01-10T00:00:00.000Z",
                "createdAt": "2024-01-01T09:00:00Z"
            })))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let draft = NewTask::new("Buy milk")
            .unwrap()
            .due_date(NaiveDate::from_ymd_opt(2024, 1, 10));
        let created = ctx.api.create(&draft).await.unwrap();

        assert_eq!(created.id.as_deref(), Some("1"));
        assert_eq!(created.due_date, NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test_context(TasksApiContext)]
    #[tokio::test]
    async fn test_update_puts_record_without_timestamps(ctx: &mut TasksApiContext) {
        Mock::given(method("PUT"))
            .and(path("/tasks/7"))
            .and(body_json(json!({
                "id": "7",
                "title": "Write notes",
                "status": "completed"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "id": "7",
                    "title": "Write notes",
                    "status": "completed",
                    "createdAt": "2024-01-01T09:00:00Z",
                    "updatedAt": "2024-01-02T09:00:00Z"
                })),
            )
            .expect(1)
            .mount(&ctx.server)
            .await;

        let task = Task::new("Write notes").with_id("7").with_status(TaskStatus::Completed);
        let saved = ctx.api.update(&task).await.unwrap();

        assert_eq!(saved.status, TaskStatus::Completed);
        assert!(saved.updated_at.is_some());
    }

    #[test_context(TasksApiContext)]
    #[tokio::test]
    async fn test_update_without_id_is_rejected_locally(ctx: &mut TasksApiContext) {
        let result = ctx.api.update(&Task::new("Unsaved")).await;

        assert!(matches!(result, Err(ApiError::MissingId)));
        assert!(ctx.server.received_requests().await.unwrap().is_empty());
    }

    #[test_context(TasksApiContext)]
    #[tokio::test]
    async fn test_delete(ctx: &mut TasksApiContext) {
        Mock::given(method("DELETE"))
            .and(path("/tasks/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
            .expect(1)
            .mount(&ctx.server)
            .await;

        ctx.api.delete("3").await.unwrap();
    }

    #[test_context(TasksApiContext)]
    #[tokio::test]
    async fn test_unauthorized(ctx: &mut TasksApiContext) {
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&ctx.server)
            .await;

        let result = ctx.api.list(&TaskFilter::new()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test_context(TasksApiContext)]
    #[tokio::test]
    async fn test_server_error_keeps_body(ctx: &mut TasksApiContext) {
        Mock::given(method("DELETE"))
            .and(path("/tasks/9"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&ctx.server)
            .await;

        match ctx.api.delete("9").await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
