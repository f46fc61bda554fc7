//! Core library modules.
//!
//! - **Rules**: task model, status lifecycle, filtering
//! - **State**: the board that owns the cached task list
//! - **Infrastructure**: configuration, data directory, encrypted token, HTTP
//! - **Presentation**: messages and table views
//!
//! ```rust
//! use taskman::libs::filter::TaskFilter;
//! use taskman::libs::task::{Task, TaskStatus};
//! use taskman::libs::transition::apply_transition;
//!
//! let task = Task::new("Ship release").with_id("42");
//! let started = apply_transition(&task, TaskStatus::InProgress).unwrap();
//! let visible = TaskFilter::new().status(TaskStatus::InProgress).apply(&[task, started]);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod board;
pub mod config;
pub mod data_storage;
pub mod filter;
pub mod http;
pub mod messages;
pub mod secret;
pub mod task;
pub mod transition;
pub mod view;
