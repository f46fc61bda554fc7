//! Login, registration and token verification against the task service.

use super::{ApiError, Session};
use crate::libs::config::ServerConfig;
use crate::libs::http::Http;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde::{Deserialize, Serialize};

/// File in the data directory that holds the encrypted token.
pub const TOKEN_FILE: &str = ".token";

const LOGIN_URL: &str = "auth/login";
const REGISTER_URL: &str = "auth/register";
const VERIFY_TOKEN_URL: &str = "auth/verify-token";

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Registration<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

pub struct AuthApi {
    http: Http,
    token_store: Secret,
    email: Option<String>,
}

impl AuthApi {
    pub fn new(server: &ServerConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: Http::new(server)?,
            token_store: Secret::new(TOKEN_FILE),
            email: None,
        })
    }

    pub fn with_token_store(mut self, token_store: Secret) -> Self {
        self.token_store = token_store;
        self
    }

    /// Uses `email` for the first login attempt instead of prompting for it.
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        tracing::debug!(email = %credentials.email, "logging in");
        let res = self.http.post(LOGIN_URL).json(credentials).send().await?;
        Ok(Http::expect_success(res).await?.json::<LoginResponse>().await?)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        tracing::debug!(%email, "registering");
        let body = Registration { name, email, password };
        let res = self.http.post(REGISTER_URL).json(&body).send().await?;
        Ok(Http::expect_success(res).await?.json::<LoginResponse>().await?)
    }

    /// True only when the service answers `200 OK`; any failure counts as invalid.
    pub async fn verify(&self, token: &str) -> bool {
        let request = Http::bearer(self.http.get(VERIFY_TOKEN_URL), token);
        match request.send().await {
            Ok(res) => res.status() == reqwest::StatusCode::OK,
            Err(e) => {
                tracing::debug!(error = %e, "token verification failed");
                false
            }
        }
    }

    /// Registers and caches the token of the new account.
    pub async fn register_and_store(&self, name: &str, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self.register(name, email, password).await?;
        self.token_store.store(&response.token)?;
        Ok(response)
    }
}

impl Session for AuthApi {
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login(credentials).await
    }

    async fn verify_token(&self, token: &str) -> bool {
        self.verify(token).await
    }

    fn credentials(&self, retry: i32) -> Result<Credentials> {
        let theme = ColorfulTheme::default();
        let email = match (&self.email, retry) {
            (Some(email), 0) => email.clone(),
            (default, _) => {
                let mut input = Input::<String>::with_theme(&theme).with_prompt(Message::PromptEmail.to_string());
                if let Some(email) = default {
                    input = input.default(email.clone());
                }
                input.interact_text()?
            }
        };
        let password = Password::with_theme(&theme)
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?;

        Ok(Credentials::new(email, password))
    }

    fn token_store(&self) -> &Secret {
        &self.token_store
    }
}
