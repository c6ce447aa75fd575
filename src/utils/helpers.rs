//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveDate;
use url::Url;
use uuid::Uuid;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Render a calendar date string in long form, leaving unparseable input as is
pub fn format_event_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format("%a, %b %-d %Y").to_string(),
        None => value.to_string(),
    }
}

/// Check that a string is an absolute http(s) URL
pub fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}
