//! Terminal front-end handlers
//!
//! Command handlers map parsed commands onto the application context and
//! render the resulting views as text.

pub mod commands;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
