//! Identity entity
//! The authenticated user of a session

use crate::domain::Role;
use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the login and signup endpoints.
///
/// The bearer token is held next to the identity by the session store, never
/// inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    pub role: Role,
}

impl Identity {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn is_doctor(&self) -> bool {
        self.role == Role::Doctor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(first: &str, last: &str) -> Identity {
        Identity {
            id: "u1".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: "someone@example.com".to_string(),
            role: Role::Doctor,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(identity("Ada", "Obi").display_name(), "Ada Obi");
        assert_eq!(identity("Ada", "").display_name(), "Ada");
        assert_eq!(identity("", "").display_name(), "someone@example.com");
    }

    #[test]
    fn test_accepts_underscore_and_plain_id() {
        let a: Identity = serde_json::from_str(r#"{"_id":"x1","role":"doctor"}"#).unwrap();
        let b: Identity = serde_json::from_str(r#"{"id":"x1","role":"doctor"}"#).unwrap();
        assert_eq!(a, b);
        assert!(a.is_doctor());
    }

    #[test]
    fn test_persisted_form_round_trips() {
        let original = identity("Ada", "Obi");
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"_id\":\"u1\""));
        let restored: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
