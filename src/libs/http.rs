use crate::api::ApiError;
use crate::libs::config::ServerConfig;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP plumbing for the task service clients.
#[derive(Clone, Debug)]
pub struct Http {
    client: Client,
    server: ServerConfig,
}

impl Http {
    pub fn new(server: &ServerConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(server.timeout_secs.max(1)))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            server: server.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        self.server.endpoint(path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }

    pub fn bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(header::AUTHORIZATION, format!("Bearer {}", token))
    }

    /// Passes 2xx responses through and turns everything else into an [`ApiError`].
    pub async fn expect_success(res: Response) -> Result<Response, ApiError> {
        let status = res.status();
        tracing::debug!(status = status.as_u16(), url = %res.url(), "task service response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(res)
    }
}
