//! Derived views
//!
//! The registered-events projection and the role-keyed view selection.
//! Nothing here owns data; every value is recomputed from the event
//! collection and the session.

use crate::models::event::Event;
use crate::models::identity::{Identity, Role};
use crate::services::SessionState;
use super::form::EventForm;

/// Events the given identity is registered for, in store order.
///
/// Empty when nobody is signed in.
pub fn derive_registered(events: &[Event], identity: Option<&Identity>) -> Vec<Event> {
    let Some(identity) = identity else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| event.is_registered(&identity.user_id))
        .cloned()
        .collect()
}

/// One event as shown in the browse list
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub event: Event,
    /// Registering again is disabled for these
    pub is_registered: bool,
}

/// What a regular user sees
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView {
    pub identity: Identity,
    pub registered: Vec<Event>,
    pub upcoming: Vec<EventCard>,
}

impl BrowseView {
    pub fn build(identity: &Identity, events: &[Event], registered: &[Event]) -> Self {
        let upcoming = events
            .iter()
            .map(|event| EventCard {
                is_registered: event.is_registered(&identity.user_id),
                event: event.clone(),
            })
            .collect();

        Self {
            identity: identity.clone(),
            registered: registered.to_vec(),
            upcoming,
        }
    }

    /// The "your registered events" section is hidden when empty
    pub fn shows_registered_section(&self) -> bool {
        !self.registered.is_empty()
    }
}

/// What an administrator sees
#[derive(Debug, Clone, PartialEq)]
pub struct AdminView {
    pub identity: Identity,
    pub form: EventForm,
    pub event_count: usize,
}

/// Top-level view for the current session
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    /// Nobody signed in; the front end asks for sign-in
    SignedOut,
    Browse(BrowseView),
    Admin(AdminView),
}

impl View {
    /// Pick the view for a session. Admins get the creation form and never
    /// the browse list; regular users never get the form.
    pub fn select(session: &SessionState, events: &[Event], registered: &[Event], form: &EventForm) -> Self {
        match session {
            SessionState::Loading => View::Loading,
            SessionState::SignedOut => View::SignedOut,
            SessionState::SignedIn(identity) => match identity.role {
                Role::Admin => View::Admin(AdminView {
                    identity: identity.clone(),
                    form: form.clone(),
                    event_count: events.len(),
                }),
                Role::Regular => View::Browse(BrowseView::build(identity, events, registered)),
            },
        }
    }
}
