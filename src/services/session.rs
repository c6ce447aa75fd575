//! Session resolution
//!
//! Tracks whether the identity provider has answered yet and, if so, who is
//! signed in. "Still loading" and "signed out" are kept apart.

use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::models::identity::{Identity, Role};
use super::identity::IdentityProvider;

/// Session as seen by the client
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Provider has not answered yet
    Loading,
    SignedOut,
    SignedIn(Identity),
}

impl SessionState {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, SessionState::Loading)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }
}

/// Resolves the current session from an identity provider
#[derive(Clone)]
pub struct SessionResolver {
    provider: Arc<dyn IdentityProvider>,
    state: SessionState,
}

impl SessionResolver {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    /// Ask the provider for the current session.
    ///
    /// A provider failure keeps the previous state, so a first failed attempt
    /// leaves the session loading. Returns whether the identity changed.
    pub async fn resolve(&mut self) -> bool {
        let next = match self.provider.current_identity().await {
            Ok(Some(identity)) => SessionState::SignedIn(identity),
            Ok(None) => SessionState::SignedOut,
            Err(e) => {
                warn!(error = %e, "Failed to resolve session, keeping previous state");
                return false;
            }
        };

        if next == self.state {
            debug!("Session unchanged");
            return false;
        }

        match &next {
            SessionState::SignedIn(identity) => {
                info!(user_id = %identity.user_id, role = ?identity.role, "Session signed in");
            }
            _ => info!("Session signed out"),
        }

        self.state = next;
        true
    }
}
