//! # Taskman
//!
//! A command-line client for a remote task service.
//!
//! ## Features
//!
//! - **Task Lifecycle**: tasks move forward only, from pending to in progress to completed
//! - **Filtering**: by status, free text, and an inclusive due-date range
//! - **Remote Storage**: the task service is the source of truth, the client only caches
//! - **Sessions**: login, registration and token verification, with an encrypted token cache
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
