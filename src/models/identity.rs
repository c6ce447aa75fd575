//! Identity model

use serde::{Deserialize, Serialize};

/// Metadata key and value that mark an administrator
pub const ROLE_METADATA_KEY: &str = "role";
pub const ADMIN_ROLE: &str = "admin";

/// Role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Regular,
}

impl Role {
    /// Read the role from provider-supplied public metadata
    pub fn from_metadata(metadata: Option<&serde_json::Value>) -> Self {
        let role = metadata
            .and_then(|m| m.get(ROLE_METADATA_KEY))
            .and_then(|v| v.as_str());

        match role {
            Some(ADMIN_ROLE) => Role::Admin,
            _ => Role::Regular,
        }
    }

    /// Parse a configured role name; anything but "admin" is a regular user
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(ADMIN_ROLE) => Role::Admin,
            _ => Role::Regular,
        }
    }
}

/// A signed-in user as resolved from the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub display_name: Option<String>,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, display_name: Option<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            display_name,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name used in greetings
    pub fn greeting_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "User",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_from_metadata() {
        assert_eq!(Role::from_metadata(Some(&json!({ "role": "admin" }))), Role::Admin);
        assert_eq!(Role::from_metadata(Some(&json!({ "role": "student" }))), Role::Regular);
        assert_eq!(Role::from_metadata(Some(&json!({ "role": "Admin" }))), Role::Regular);
        assert_eq!(Role::from_metadata(Some(&json!({}))), Role::Regular);
        assert_eq!(Role::from_metadata(None), Role::Regular);
    }

    #[test]
    fn test_greeting_name_fallback() {
        let named = Identity::new("u1", Some("Ada".to_string()), Role::Regular);
        assert_eq!(named.greeting_name(), "Ada");

        let anonymous = Identity::new("u2", None, Role::Admin);
        assert_eq!(anonymous.greeting_name(), "User");
        assert!(anonymous.is_admin());
    }
}
