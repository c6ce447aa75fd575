//! Campus Connector
//!
//! Event discovery and registration client for a campus community.
//! This library keeps the client-side state in sync: who is signed in, the
//! event collection fetched from the backend, and the events the current
//! user is registered for. Administrators can create events.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{AppContext, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
