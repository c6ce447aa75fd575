//! Event model

use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use crate::utils::errors::CampusError;

/// An event as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_unique_ids")]
    pub registered_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Whether the given user appears in this event's registrations
    pub fn is_registered(&self, user_id: &str) -> bool {
        self.registered_users.iter().any(|id| id == user_id)
    }

    pub fn registered_count(&self) -> usize {
        self.registered_users.len()
    }
}

/// Keeps the first occurrence of every id; `null` decodes as empty.
fn deserialize_unique_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids: Option<Vec<String>> = Option::deserialize(deserializer)?;
    let mut unique: Vec<String> = Vec::new();
    for id in ids.unwrap_or_default() {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    Ok(unique)
}

/// Event categories offered by the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EventCategory {
    Workshop,
    Cultural,
    Career,
    Academic,
    Sports,
    /// Anything the backend sends that this client does not know about
    #[default]
    Other,
}

/// Names match case-insensitively; null, non-string and unknown values
/// decode as `Other` so one odd record never rejects the whole collection.
impl<'de> Deserialize<'de> for EventCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default())
    }
}

impl EventCategory {
    /// Categories an administrator may choose from
    pub const SELECTABLE: [EventCategory; 5] = [
        EventCategory::Workshop,
        EventCategory::Cultural,
        EventCategory::Career,
        EventCategory::Academic,
        EventCategory::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshop",
            EventCategory::Cultural => "Cultural",
            EventCategory::Career => "Career",
            EventCategory::Academic => "Academic",
            EventCategory::Sports => "Sports",
            EventCategory::Other => "Other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::SELECTABLE
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::SELECTABLE.iter().map(|c| c.as_str()).collect();
                CampusError::InvalidInput(format!(
                    "Unknown category '{}'. Choose one of: {}",
                    wanted,
                    names.join(", ")
                ))
            })
    }
}

/// Body of `POST /api/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: String,
    pub category: EventCategory,
    pub image: String,
    pub description: String,
    pub location: String,
}

/// Body of `POST /api/events/{id}/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}
