//! Events backend service implementation
//!
//! This service talks to the events REST API: listing the full event
//! collection, creating events and registering users for them.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;
use crate::config::BackendConfig;
use crate::models::event::{CreateEventRequest, Event, RegisterRequest};
use crate::utils::errors::{BackendError, CampusError, Result};

/// Operations the client needs from the events backend
#[async_trait]
pub trait EventApi: Send + Sync {
    /// `GET /api/events`
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// `POST /api/events`
    async fn create_event(&self, request: &CreateEventRequest) -> Result<()>;

    /// `POST /api/events/{event_id}/register`
    async fn register(&self, event_id: &str, user_id: &str) -> Result<()>;
}

/// HTTP client for the events backend
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new BackendClient instance
    pub fn new(config: &BackendConfig) -> Result<Self> {
        // Reject garbage early instead of on the first request
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("CampusConnector/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CampusError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn events_url(&self) -> String {
        format!("{}/api/events", self.base_url)
    }

    fn register_url(&self, event_id: &str) -> String {
        format!("{}/api/events/{}/register", self.base_url, urlencoding::encode(event_id))
    }

    /// Turn a non-2xx response into a status error
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

fn map_send_error(e: reqwest::Error) -> CampusError {
    if e.is_timeout() {
        CampusError::Backend(BackendError::Timeout)
    } else if e.is_connect() {
        CampusError::Backend(BackendError::ServiceUnavailable)
    } else {
        CampusError::Backend(BackendError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl EventApi for BackendClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        let url = self.events_url();
        debug!(url = %url, "Fetching event collection");

        let response = self.client.get(&url).send().await.map_err(map_send_error)?;
        let response = Self::ensure_success(response).await?;

        let body = response.text().await.map_err(map_send_error)?;
        let events: Vec<Event> = serde_json::from_str(&body)
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        debug!(count = events.len(), "Event collection fetched");
        Ok(events)
    }

    async fn create_event(&self, request: &CreateEventRequest) -> Result<()> {
        let url = self.events_url();
        debug!(url = %url, title = %request.title, "Creating event");

        let response = self.client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;
        Self::ensure_success(response).await?;

        Ok(())
    }

    async fn register(&self, event_id: &str, user_id: &str) -> Result<()> {
        let url = self.register_url(event_id);
        debug!(url = %url, event_id = event_id, user_id = user_id, "Registering for event");

        let body = RegisterRequest {
            user_id: user_id.to_string(),
        };
        let response = self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;
        Self::ensure_success(response).await?;

        Ok(())
    }
}
