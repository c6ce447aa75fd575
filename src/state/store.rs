//! Client-side event store
//!
//! Holds the full event collection last fetched from the backend. The
//! collection is only ever replaced wholesale by a successful refresh.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use crate::models::event::Event;
use crate::services::EventApi;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Event collection shared between the refresh path and the views
#[derive(Clone)]
pub struct EventStore {
    api: Arc<dyn EventApi>,
    events: Arc<RwLock<Vec<Event>>>,
}

impl EventStore {
    /// Create an empty store backed by the given API
    pub fn new(api: Arc<dyn EventApi>) -> Self {
        Self {
            api,
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fetch the whole collection once and replace the local copy.
    ///
    /// On failure the previous collection is kept and the error is logged
    /// before being returned. Overlapping refreshes are not cancelled; the
    /// last one to complete wins.
    pub async fn refresh(&self) -> Result<usize> {
        debug!("Refreshing event store");

        let fetched = match self.api.list_events().await {
            Ok(events) => events,
            Err(e) => {
                error!(error = %e, "Failed to refresh events, keeping previous collection");
                logging::log_api_error("events", &e.to_string(), Some("refresh"));
                return Err(e);
            }
        };

        let count = fetched.len();
        *self.events.write().await = fetched;

        info!(count = count, "Event store refreshed");
        Ok(count)
    }

    /// Copy of the current collection in backend order
    pub async fn snapshot(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    pub async fn find(&self, event_id: &str) -> Option<Event> {
        self.events
            .read()
            .await
            .iter()
            .find(|event| event.id == event_id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    /// Drop the collection on teardown
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}
