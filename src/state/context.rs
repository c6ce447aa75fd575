//! Application context
//!
//! Owns the session, the event store, the dispatcher and the admin form, and
//! keeps the registered-events projection in step with them. There is no
//! automatic dependency tracking: every path that changes the events or the
//! identity calls [`AppContext::recompute`] before returning.

use std::sync::Arc;
use tracing::{debug, info};
use crate::config::Settings;
use crate::models::event::Event;
use crate::models::identity::Identity;
use crate::services::{EventApi, IdentityProvider, ServiceFactory, SessionResolver, SessionState};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging;
use super::dispatcher::ActionDispatcher;
use super::form::{EventForm, FormField};
use super::store::EventStore;
use super::view::{derive_registered, View};

/// Client state for one session
pub struct AppContext {
    session: SessionResolver,
    store: EventStore,
    dispatcher: ActionDispatcher,
    form: EventForm,
    registered: Vec<Event>,
}

impl AppContext {
    /// Create a context over the given collaborators
    pub fn new(event_api: Arc<dyn EventApi>, identity_provider: Arc<dyn IdentityProvider>) -> Self {
        let store = EventStore::new(event_api.clone());
        let dispatcher = ActionDispatcher::new(event_api, store.clone());

        Self {
            session: SessionResolver::new(identity_provider),
            store,
            dispatcher,
            form: EventForm::default(),
            registered: Vec::new(),
        }
    }

    /// Create a context from configured services
    pub fn from_factory(factory: ServiceFactory) -> Self {
        Self::new(factory.event_api, factory.identity_provider)
    }

    /// Build services from settings and create a context over them
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::from_factory(ServiceFactory::new(settings)?))
    }

    /// Resolve the session and, once signed in, load events.
    ///
    /// Calling this again re-asks the provider; a changed identity triggers
    /// a fresh fetch.
    pub async fn start(&mut self) -> Result<()> {
        let changed = self.session.resolve().await;

        if !self.session.is_loaded() {
            self.recompute().await;
            return Err(CampusError::SessionNotLoaded);
        }

        if self.session.identity().is_some() && (changed || self.store.is_empty().await) {
            // The session itself is fine even if the fetch fails; the error is
            // already logged by the store.
            let _ = self.store.refresh().await;
        }

        self.recompute().await;
        Ok(())
    }

    /// Re-fetch the event collection
    pub async fn refresh(&mut self) -> Result<usize> {
        self.require_identity()?;
        let result = self.store.refresh().await;
        self.recompute().await;
        result
    }

    /// Register the signed-in user for an event
    pub async fn register(&mut self, event_id: &str) -> Result<()> {
        let user_id = self.require_identity()?.user_id.clone();

        let result = self.dispatcher.register(event_id, &user_id).await;
        if result.is_ok() {
            logging::log_user_action(&user_id, "register", Some(event_id));
        }
        self.recompute().await;
        result
    }

    /// Set one field of the creation form (admin only)
    pub fn set_form_field(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        self.require_admin()?;
        self.form.set(field, value);
        Ok(())
    }

    /// Submit the creation form (admin only)
    pub async fn submit_event(&mut self) -> Result<()> {
        let admin_id = self.require_admin()?.user_id.clone();
        let title = self.form.title.clone();

        let result = self.dispatcher.create_event(&mut self.form).await;
        if result.is_ok() {
            logging::log_admin_action(&admin_id, "create_event", Some(&title), None);
        }
        self.recompute().await;
        result
    }

    /// Recompute the registered-events projection from the current inputs
    pub async fn recompute(&mut self) {
        let events = self.store.snapshot().await;
        self.registered = derive_registered(&events, self.session.identity());
        debug!(
            events = events.len(),
            registered = self.registered.len(),
            "Recomputed registered events"
        );
    }

    /// View for the current session and role
    pub async fn view(&self) -> View {
        let events = self.store.snapshot().await;
        View::select(self.session.state(), &events, &self.registered, &self.form)
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn registered_events(&self) -> &[Event] {
        &self.registered
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Drop all per-session client state
    pub async fn teardown(&mut self) {
        self.store.clear().await;
        self.form.clear();
        self.registered.clear();
        info!("Client state torn down");
    }

    fn require_identity(&self) -> Result<&Identity> {
        match self.session.state() {
            SessionState::Loading => Err(CampusError::SessionNotLoaded),
            SessionState::SignedOut => Err(CampusError::NotSignedIn),
            SessionState::SignedIn(identity) => Ok(identity),
        }
    }

    fn require_admin(&self) -> Result<&Identity> {
        let identity = self.require_identity()?;
        if !identity.is_admin() {
            return Err(CampusError::PermissionDenied(
                "Admin privileges required".to_string()
            ));
        }
        Ok(identity)
    }
}
