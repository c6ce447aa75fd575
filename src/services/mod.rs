//! Services module
//!
//! This module contains the clients for the external collaborators:
//! the events backend and the identity provider.

pub mod backend;
pub mod identity;
pub mod session;

// Re-export commonly used services
pub use backend::{BackendClient, EventApi};
pub use identity::{HttpIdentityProvider, IdentityProvider, StaticIdentityProvider};
pub use session::{SessionResolver, SessionState};

use std::sync::Arc;
use tracing::info;
use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_api: Arc<dyn EventApi>,
    pub identity_provider: Arc<dyn IdentityProvider>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let event_api: Arc<dyn EventApi> = Arc::new(BackendClient::new(&settings.backend)?);

        let identity_provider: Arc<dyn IdentityProvider> = match &settings.identity.static_user {
            Some(user) => {
                info!(user_id = %user.id, "Using statically configured identity");
                Arc::new(StaticIdentityProvider::from(user))
            }
            None => Arc::new(HttpIdentityProvider::new(&settings.identity)?),
        };

        Ok(Self {
            event_api,
            identity_provider,
        })
    }
}
