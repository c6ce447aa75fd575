//! In-memory backend used by unit tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use crate::models::event::{CreateEventRequest, Event, EventCategory};
use crate::models::identity::Identity;
use crate::services::{EventApi, IdentityProvider};
use crate::utils::errors::{BackendError, Result};

/// Backend double that follows the real API contract
#[derive(Default)]
pub struct InMemoryEventApi {
    events: Mutex<Vec<Event>>,
    fail_list: AtomicBool,
    fail_mutations: AtomicBool,
    list_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl InMemoryEventApi {
    pub fn with_events(events: Vec<Event>) -> Self {
        let api = Self::default();
        api.replace_events(events);
        api
    }

    pub fn replace_events(&self, events: Vec<Event>) {
        *self.events.lock().unwrap() = events;
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventApi for InMemoryEventApi {
    async fn list_events(&self) -> Result<Vec<Event>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(BackendError::ServiceUnavailable.into());
        }
        Ok(self.events())
    }

    async fn create_event(&self, request: &CreateEventRequest) -> Result<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(BackendError::Status { status: 500, body: "boom".to_string() }.into());
        }
        let id = format!("new-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.events.lock().unwrap().push(Event {
            id,
            title: request.title.clone(),
            date: request.date.clone(),
            category: request.category,
            image: request.image.clone(),
            description: request.description.clone(),
            location: request.location.clone(),
            registered_users: Vec::new(),
            created_at: None,
            updated_at: None,
        });
        Ok(())
    }

    async fn register(&self, event_id: &str, user_id: &str) -> Result<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(BackendError::Timeout.into());
        }
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| BackendError::Status { status: 404, body: "Event not found".to_string() })?;
        if !event.is_registered(user_id) {
            event.registered_users.push(user_id.to_string());
        }
        Ok(())
    }
}

/// Identity provider whose answer can be changed between resolutions
#[derive(Default)]
pub struct SwitchableIdentityProvider {
    identity: Mutex<Option<Identity>>,
}

impl SwitchableIdentityProvider {
    pub fn sign_in(&self, identity: Identity) {
        *self.identity.lock().unwrap() = Some(identity);
    }

    pub fn sign_out(&self) {
        *self.identity.lock().unwrap() = None;
    }
}

#[async_trait]
impl IdentityProvider for SwitchableIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        Ok(self.identity.lock().unwrap().clone())
    }
}

pub fn sample_event(id: &str, registered: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {}", id),
        date: "2025-04-01".to_string(),
        category: EventCategory::Academic,
        image: "https://cdn.example.edu/event.png".to_string(),
        description: "Talk and Q&A".to_string(),
        location: "Main Hall".to_string(),
        registered_users: registered.iter().map(|s| s.to_string()).collect(),
        created_at: None,
        updated_at: None,
    }
}
