//! Clients for the remote task service.
//!
//! The service is the system of record: tasks are created, listed, updated
//! and deleted through [`TaskStore`], and access is gated by a bearer token
//! obtained through [`Session`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::api::{auth::AuthApi, tasks::TasksApi, Session, TaskStore};
//! use taskman::libs::{config::Config, filter::TaskFilter};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let server = Config::read()?.server()?;
//! let token = AuthApi::new(&server)?.get_token().await?;
//! let tasks = TasksApi::new(&server, token)?.list(&TaskFilter::new()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::filter::TaskFilter;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::libs::task::{NewTask, Task};
use crate::{msg_error, msg_error_anyhow, msg_warning};
use anyhow::Result;
use thiserror::Error;

pub mod auth;
pub mod tasks;

pub use auth::{AuthApi, Credentials, LoginResponse};
pub use tasks::TasksApi;

/// Maximum number of failed logins before giving up.
pub const MAX_RETRY_COUNT: i32 = 3;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authorized: the token is missing, invalid or expired")]
    Unauthorized,

    #[error("task service answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("task has no id; it has not been saved yet")]
    MissingId,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether the service rejected the request itself, as opposed to a transport failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Status { .. })
    }
}

/// The remote service of record for tasks.
///
/// Every method returns the service's view of the record on success. Callers
/// update their local copy only from these results.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    async fn create(&self, draft: &NewTask) -> Result<Task, ApiError>;

    /// Lists tasks, passing the filter along as query parameters.
    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError>;

    /// Replaces the stored record with `task`. The task must have an id.
    async fn update(&self, task: &Task) -> Result<Task, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Token-based session handling shared by the authentication client and its test doubles.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Exchanges credentials for a login response carrying a token.
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Asks the service whether `token` is still valid.
    async fn verify_token(&self, token: &str) -> bool;

    /// Obtains credentials for attempt number `retry` (0-based), usually by prompting.
    fn credentials(&self, retry: i32) -> Result<Credentials>;

    /// Encrypted storage holding the current token.
    fn token_store(&self) -> &Secret;

    /// Returns a valid token, logging in when the cached one is missing or rejected.
    ///
    /// A cached token that still verifies is returned as is. One that fails
    /// verification is discarded and [`Session::sign_in`] runs instead.
    async fn get_token(&self) -> Result<String> {
        if let Ok(token) = self.token_store().load() {
            if self.verify_token(&token).await {
                return Ok(token);
            }
            self.token_store().clear()?;
            msg_warning!(Message::SessionExpired);
        }

        Ok(self.sign_in().await?.token)
    }

    /// Requests credentials and exchanges them for a token, caching it.
    ///
    /// Rejected attempts are retried up to [`MAX_RETRY_COUNT`] times; transport
    /// failures end the loop immediately.
    async fn sign_in(&self) -> Result<LoginResponse> {
        let mut retry = 0;
        loop {
            let credentials = self.credentials(retry)?;
            match self.authenticate(&credentials).await {
                Ok(response) => {
                    self.token_store().store(&response.token)?;
                    return Ok(response);
                }
                Err(e) if e.is_rejection() => {
                    if retry < MAX_RETRY_COUNT {
                        msg_error!(Message::LoginFailed);
                        retry += 1;
                        continue;
                    }
                    return Err(msg_error_anyhow!(Message::WrongPassword(retry + 1)));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Forgets the cached token.
    fn logout(&self) -> Result<()> {
        self.token_store().clear()
    }
}
