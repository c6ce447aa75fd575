//! Test data helpers
//!
//! Builders for backend payloads, settings and application contexts.

use serde_json::{json, Value};
use CampusConnector::config::{Settings, StaticUserConfig};
use CampusConnector::AppContext;

pub const TEST_USER_ID: &str = "user_2abc";
pub const TEST_ADMIN_ID: &str = "user_admin";

/// An event record the way the backend serves it
pub fn event_json(id: &str, title: &str, registered: &[&str]) -> Value {
    json!({
        "_id": id,
        "title": title,
        "date": "2025-04-18",
        "category": "Workshop",
        "image": "https://cdn.example.edu/event.png",
        "description": format!("All about {}", title),
        "location": "Room 101",
        "registeredUsers": registered,
        "createdAt": "2025-03-01T12:00:00.000Z",
        "updatedAt": "2025-03-01T12:00:00.000Z",
        "__v": 0
    })
}

/// Settings pointing at a mock backend with a fixed identity
pub fn settings_for(base_url: &str, user_id: &str, role: Option<&str>) -> Settings {
    let mut settings = Settings::default();
    settings.backend.base_url = base_url.to_string();
    settings.backend.timeout_seconds = 2;
    settings.identity.provider_key = "pk_test_campus".to_string();
    settings.identity.static_user = Some(StaticUserConfig {
        id: user_id.to_string(),
        display_name: Some("Test".to_string()),
        role: role.map(str::to_string),
    });
    settings
}

/// Regular-user context against a mock backend
pub fn student_context(base_url: &str) -> AppContext {
    let settings = settings_for(base_url, TEST_USER_ID, None);
    AppContext::from_settings(&settings).expect("Failed to create context")
}

/// Admin context against a mock backend
pub fn admin_context(base_url: &str) -> AppContext {
    let settings = settings_for(base_url, TEST_ADMIN_ID, Some("admin"));
    AppContext::from_settings(&settings).expect("Failed to create context")
}
