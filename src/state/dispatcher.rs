//! Action dispatcher
//!
//! Sends mutating requests to the backend. A successful action triggers a
//! store refresh; a failed one changes nothing locally. There is no
//! optimistic update of the event collection.

use std::sync::Arc;
use tracing::{error, info, warn};
use crate::services::EventApi;
use crate::utils::errors::Result;
use crate::utils::helpers::generate_uuid;
use crate::utils::logging;
use super::form::EventForm;
use super::store::EventStore;

#[derive(Clone)]
pub struct ActionDispatcher {
    api: Arc<dyn EventApi>,
    store: EventStore,
}

impl ActionDispatcher {
    pub fn new(api: Arc<dyn EventApi>, store: EventStore) -> Self {
        Self { api, store }
    }

    /// Register a user for an event, then refresh the store.
    ///
    /// A refresh failure after a successful registration is logged by the
    /// store and does not fail the registration.
    pub async fn register(&self, event_id: &str, user_id: &str) -> Result<()> {
        let request_id = generate_uuid();
        logging::log_event_action(event_id, "register", user_id, &request_id);

        if let Err(e) = self.api.register(event_id, user_id).await {
            error!(
                request_id = %request_id,
                event_id = event_id,
                user_id = user_id,
                error = %e,
                "Registration failed"
            );
            return Err(e);
        }

        info!(request_id = %request_id, event_id = event_id, "Registration accepted");
        let _ = self.store.refresh().await;
        Ok(())
    }

    /// Submit the creation form.
    ///
    /// Success clears the form and refreshes the store. Any failure, including
    /// local validation, leaves the form exactly as entered.
    pub async fn create_event(&self, form: &mut EventForm) -> Result<()> {
        let request_id = generate_uuid();

        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Event form rejected before sending");
                return Err(e);
            }
        };

        if let Err(e) = self.api.create_event(&request).await {
            error!(request_id = %request_id, title = %request.title, error = %e, "Event creation failed");
            return Err(e);
        }

        info!(request_id = %request_id, title = %request.title, category = %request.category, "Event created");
        form.clear();
        let _ = self.store.refresh().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{sample_event, InMemoryEventApi};

    fn setup(api: Arc<InMemoryEventApi>) -> (ActionDispatcher, EventStore) {
        let store = EventStore::new(api.clone());
        (ActionDispatcher::new(api, store.clone()), store)
    }

    fn filled_form() -> EventForm {
        EventForm {
            title: "Diwali Night".to_string(),
            date: "2025-10-20".to_string(),
            category: "Cultural".to_string(),
            image: "https://cdn.example.edu/diwali.jpg".to_string(),
            description: "Food, music and lights.".to_string(),
            location: "Student Union".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_refreshes_store() {
        let api = Arc::new(InMemoryEventApi::with_events(vec![sample_event("e1", &[])]));
        let (dispatcher, store) = setup(api.clone());

        dispatcher.register("e1", "u1").await.unwrap();

        let event = store.find("e1").await.unwrap();
        assert_eq!(event.registered_users, vec!["u1"]);
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_repeat_registration_does_not_duplicate() {
        let api = Arc::new(InMemoryEventApi::with_events(vec![sample_event("e1", &[])]));
        let (dispatcher, store) = setup(api);

        dispatcher.register("e1", "u1").await.unwrap();
        dispatcher.register("e1", "u1").await.unwrap();

        assert_eq!(store.find("e1").await.unwrap().registered_users, vec!["u1"]);
    }

    #[tokio::test]
    async fn test_failed_registration_changes_nothing() {
        let api = Arc::new(InMemoryEventApi::with_events(vec![sample_event("e1", &[])]));
        let (dispatcher, store) = setup(api.clone());
        store.refresh().await.unwrap();

        api.set_fail_mutations(true);
        assert!(dispatcher.register("e1", "u1").await.is_err());

        assert!(store.find("e1").await.unwrap().registered_users.is_empty());
        assert_eq!(api.list_calls(), 1, "no refresh after a failed action");
    }

    #[tokio::test]
    async fn test_create_clears_form_and_refreshes() {
        let api = Arc::new(InMemoryEventApi::default());
        let (dispatcher, store) = setup(api);
        let mut form = filled_form();

        dispatcher.create_event(&mut form).await.unwrap();

        assert!(form.is_empty());
        let events = store.snapshot().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Diwali Night");
        assert_eq!(events[0].location, "Student Union");
    }

    #[tokio::test]
    async fn test_failed_create_preserves_form() {
        let api = Arc::new(InMemoryEventApi::default());
        api.set_fail_mutations(true);
        let (dispatcher, store) = setup(api.clone());
        let mut form = filled_form();

        assert!(dispatcher.create_event(&mut form).await.is_err());

        assert_eq!(form, filled_form());
        assert!(store.is_empty().await);
        assert_eq!(api.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let api = Arc::new(InMemoryEventApi::default());
        let (dispatcher, _store) = setup(api.clone());
        let mut form = filled_form();
        form.date = "someday".to_string();
        let before = form.clone();

        assert!(dispatcher.create_event(&mut form).await.is_err());
        assert_eq!(form, before);
        assert!(api.events().is_empty());
    }
}
