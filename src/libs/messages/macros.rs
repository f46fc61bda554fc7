//! Output macros for application messages.
//!
//! Every line the CLI shows the user goes through one of these macros. They
//! take a [`Message`](crate::libs::messages::Message) (or anything that
//! implements `Display`) and pick the output channel at runtime.
//!
//! ## Features
//!
//! - **Dual Output**: plain terminal output normally, `tracing` events in debug mode
//! - **Prefixes**: ✅ success, ❌ error, ⚠️ warning, ℹ️ info
//! - **Error Construction**: `anyhow` errors carrying the same message text
//! - **Cached Detection**: the environment is read once per process
//!
//! ## Debug Mode
//!
//! Debug mode is on when either variable is set:
//! - **`TASKMAN_DEBUG`**: explicit switch for this application
//! - **`RUST_LOG`**: the usual `tracing-subscriber` filter
//!
//! `main` installs the fmt subscriber under the same condition, so request
//! logs from the HTTP clients and user messages end up in one stream.
//!
//! ## Output Routing
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Macro Call    │    │   Debug Mode?   │    │     Output      │
//! │  msg_success!() │───▶│ TASKMAN_DEBUG / │───▶│ tracing::info!  │
//! │                 │    │ RUST_LOG set    │    │  or println!    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Macros
//!
//! - **`msg_print!`**: plain text; `msg_print!(msg, true)` pads it with blank lines
//! - **`msg_success!`**, **`msg_info!`**, **`msg_warning!`**: status lines on stdout
//! - **`msg_error!`**: error line on stderr
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` from a message
//! - **`msg_bail_anyhow!`**: returns early with that error
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskman::libs::messages::Message;
//! use taskman::{msg_bail_anyhow, msg_error, msg_success};
//!
//! msg_success!(Message::TaskCreated("Buy milk".into()));
//! msg_error!(Message::NotLoggedIn);
//! msg_bail_anyhow!(Message::TaskNotFound("42".into()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Environment variable that switches output to `tracing`.
pub const DEBUG_ENV: &str = "TASKMAN_DEBUG";

/// Returns whether debug mode is on. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
