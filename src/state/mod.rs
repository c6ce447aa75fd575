//! State management module
//!
//! This module handles the client-side state: the fetched event collection,
//! the derived registered-events view, the admin form and the actions that
//! mutate backend state.

pub mod context;
pub mod dispatcher;
pub mod form;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used state components
pub use context::AppContext;
pub use dispatcher::ActionDispatcher;
pub use form::{EventForm, FormField};
pub use store::EventStore;
pub use view::{derive_registered, AdminView, BrowseView, EventCard, View};
