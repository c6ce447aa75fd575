//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod identity;

// Re-export commonly used models
pub use event::{Event, EventCategory, CreateEventRequest, RegisterRequest};
pub use identity::{Identity, Role};
