//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;
use crate::utils::errors::{CampusError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_backend_config(&settings.backend)?;
    validate_identity_config(&settings.identity)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend configuration
fn validate_backend_config(config: &super::BackendConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(CampusError::Config(
            "Backend base URL is required".to_string()
        ));
    }

    validate_http_url("Backend base URL", &config.base_url)?;

    if config.timeout_seconds == 0 {
        return Err(CampusError::Config(
            "Backend timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate identity provider configuration
fn validate_identity_config(config: &super::IdentityConfig) -> Result<()> {
    if config.provider_key.is_empty() {
        return Err(CampusError::Config(
            "Identity provider key is required".to_string()
        ));
    }

    match &config.static_user {
        Some(user) => {
            if user.id.is_empty() {
                return Err(CampusError::Config(
                    "Static user ID cannot be empty".to_string()
                ));
            }
        }
        None => {
            validate_http_url("Identity provider API URL", &config.api_url)?;

            if config.timeout_seconds == 0 {
                return Err(CampusError::Config(
                    "Identity provider timeout must be greater than 0".to_string()
                ));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| CampusError::Config(format!("{} is invalid: {}", name, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CampusError::Config(
            format!("{} must use http or https, got {}", name, other)
        )),
    }
}
