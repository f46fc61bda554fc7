//! Application configuration.
//!
//! Holds the connection settings for the remote task service and the
//! interactive wizard behind `taskman init`.
//!
//! ## Features
//!
//! - **JSON Persistence**: pretty-printed `config.json` in the data directory
//! - **Environment Override**: `TASKMAN_API_URL` replaces the stored URL
//! - **Interactive Setup**: `dialoguer` prompts pre-filled with current values
//! - **Explicit Paths**: `read_from` / `save_to` for callers that manage their own location
//!
//! ## Storage Location
//!
//! Resolved through [`DataStorage`]:
//! - **Windows**: `%LOCALAPPDATA%\taskman\taskman\config.json`
//! - **macOS**: `~/Library/Application Support/taskman/taskman/config.json`
//! - **Linux**: `~/.local/share/taskman/taskman/config.json`
//!
//! ## Resolution Order
//!
//! 1. `TASKMAN_API_URL` from the environment, or from a `.env` file loaded at start-up
//! 2. `server.api_url` from `config.json`
//! 3. Otherwise [`Message::ConfigMissingServer`] asks the user to run `taskman init`
//!
//! The override only replaces the URL; a stored `timeout_secs` still applies.
//! The token is never written here; see [`crate::libs::secret`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let config = Config::read()?;
//! let server = config.server()?;
//! println!("Using {}", server.endpoint("tasks"));
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Overrides [`ServerConfig::api_url`] when set.
pub const API_URL_ENV: &str = "TASKMAN_API_URL";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for the remote task service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL, e.g. `https://tasks.example.com/api`. Endpoint paths are appended to it.
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective server settings: the stored ones with the environment override applied.
    pub fn server(&self) -> Result<ServerConfig> {
        let override_url = env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty());
        Self::resolve_server(self.server.clone(), override_url)
    }

    fn resolve_server(stored: Option<ServerConfig>, override_url: Option<String>) -> Result<ServerConfig> {
        let server = match (stored, override_url) {
            (Some(stored), Some(url)) => ServerConfig { api_url: url, ..stored },
            (None, Some(url)) => ServerConfig::new(url),
            (Some(stored), None) => stored,
            (None, None) => return Err(msg_error_anyhow!(Message::ConfigMissingServer)),
        };

        if server.api_url.trim().is_empty() {
            return Err(msg_error_anyhow!(Message::ConfigMissingServer));
        }
        Ok(server)
    }

    /// Interactive setup, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.server.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleServer);
        config.server = Some(ServerConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerTimeout.to_string())
                .default(default.timeout_secs)
                .interact_text()?,
        });

        Ok(config)
    }
}
