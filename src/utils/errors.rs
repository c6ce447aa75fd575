//! Error handling for Campus Connector
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Campus Connector client
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Backend API error: {0}")]
    Backend(#[from] BackendError),

    #[error("Identity provider error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Session is still loading")]
    SessionNotLoaded,

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Events backend specific errors
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend request failed: {0}")]
    RequestFailed(String),

    #[error("Backend request timed out")]
    Timeout,

    #[error("Backend service unavailable")]
    ServiceUnavailable,

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Identity provider specific errors
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity request failed: {0}")]
    RequestFailed(String),

    #[error("Identity provider unavailable")]
    ServiceUnavailable,

    #[error("Invalid identity response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for Campus Connector operations
pub type Result<T> = std::result::Result<T, CampusError>;

impl CampusError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CampusError::Backend(BackendError::MalformedResponse(_)) => false,
            CampusError::Backend(_) => true,
            CampusError::Identity(IdentityError::InvalidResponse(_)) => false,
            CampusError::Identity(_) => true,
            CampusError::Config(_) => false,
            CampusError::ConfigLoad(_) => false,
            CampusError::PermissionDenied(_) => false,
            CampusError::NotSignedIn => false,
            CampusError::SessionNotLoaded => true,
            CampusError::EventNotFound { .. } => false,
            CampusError::InvalidInput(_) => false,
            CampusError::Http(_) => true,
            CampusError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CampusError::Config(_) => ErrorSeverity::Critical,
            CampusError::ConfigLoad(_) => ErrorSeverity::Critical,
            CampusError::PermissionDenied(_) => ErrorSeverity::Warning,
            CampusError::NotSignedIn => ErrorSeverity::Warning,
            CampusError::SessionNotLoaded => ErrorSeverity::Info,
            CampusError::EventNotFound { .. } => ErrorSeverity::Info,
            CampusError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Short message suitable for showing to the person at the terminal
    pub fn user_message(&self) -> String {
        match self {
            CampusError::Backend(BackendError::Status { status, .. }) => {
                format!("The events service rejected the request (HTTP {}).", status)
            }
            CampusError::Backend(BackendError::MalformedResponse(_)) => {
                "The events service sent an unexpected response.".to_string()
            }
            CampusError::Backend(_) | CampusError::Http(_) => {
                "Could not reach the events service. Please try again.".to_string()
            }
            CampusError::Identity(_) => {
                "Could not reach the sign-in service. Please try again.".to_string()
            }
            CampusError::PermissionDenied(reason) => format!("Access denied: {}", reason),
            CampusError::NotSignedIn => "Please sign in first.".to_string(),
            CampusError::SessionNotLoaded => "Still loading your session...".to_string(),
            CampusError::EventNotFound { event_id } => format!("No event with id {}.", event_id),
            CampusError::InvalidInput(reason) => reason.clone(),
            other => format!("Something went wrong: {}", other),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
