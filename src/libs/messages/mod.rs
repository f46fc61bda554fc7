//! User-facing messages.
//!
//! - [`types`]: the [`Message`] enum, one variant per thing the CLI can say
//! - [`display`]: the text for each variant
//! - [`macros`]: `msg_*!` macros that print a message or turn it into an error

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
