//! Identity provider integration
//!
//! Resolves who is signed in and which role they hold. The remote provider
//! is reached over HTTP; a static provider backed by configuration serves
//! offline use.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};
use crate::config::{IdentityConfig, StaticUserConfig};
use crate::models::identity::{Identity, Role};
use crate::utils::errors::{CampusError, IdentityError, Result};

/// Source of the current identity
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means the provider answered and nobody is signed in
    async fn current_identity(&self) -> Result<Option<Identity>>;
}

/// User payload returned by the provider's `/me` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub first_name: Option<String>,
    #[serde(default)]
    pub public_metadata: Option<serde_json::Value>,
}

impl From<ProviderUser> for Identity {
    fn from(user: ProviderUser) -> Self {
        let role = Role::from_metadata(user.public_metadata.as_ref());
        Identity::new(user.id, user.first_name, role)
    }
}

/// Identity provider reached over HTTP
#[derive(Clone, Debug)]
pub struct HttpIdentityProvider {
    client: Client,
    api_url: String,
    provider_key: String,
    session_token: Option<String>,
}

impl HttpIdentityProvider {
    pub fn new(config: &IdentityConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(CampusError::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            provider_key: config.provider_key.clone(),
            session_token: config.session_token.clone().filter(|t| !t.is_empty()),
        })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        let Some(token) = &self.session_token else {
            debug!("No session token configured, treating as signed out");
            return Ok(None);
        };

        let url = format!("{}/me", self.api_url);
        debug!(url = %url, "Resolving identity");

        let response = self.client
            .get(&url)
            .bearer_auth(token)
            .header("X-Publishable-Key", &self.provider_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    IdentityError::ServiceUnavailable
                } else {
                    IdentityError::RequestFailed(e.to_string())
                }
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                info!("Identity provider reports no active session");
                Ok(None)
            }
            status if status.is_success() => {
                let user: ProviderUser = response
                    .json()
                    .await
                    .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;
                Ok(Some(user.into()))
            }
            status => Err(IdentityError::RequestFailed(format!("HTTP {}", status)).into()),
        }
    }
}

/// Identity fixed at construction time
#[derive(Clone, Debug, Default)]
pub struct StaticIdentityProvider {
    identity: Option<Identity>,
}

impl StaticIdentityProvider {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    pub fn signed_out() -> Self {
        Self { identity: None }
    }
}

impl From<&StaticUserConfig> for StaticIdentityProvider {
    fn from(user: &StaticUserConfig) -> Self {
        Self::new(Some(Identity::new(
            user.id.clone(),
            user.display_name.clone(),
            Role::from_name(user.role.as_deref()),
        )))
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        Ok(self.identity.clone())
    }
}
