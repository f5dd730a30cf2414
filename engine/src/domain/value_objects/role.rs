//! Role value object
//! Which side of the dashboard an identity belongs to

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            _ => None,
        }
    }

    /// Landing route for an authenticated identity of this role
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Patient => "/patient-dashboard",
            Role::Doctor => "/doctor-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Role::parse("doctor"), Some(Role::Doctor));
        assert_eq!(Role::parse(" Patient "), Some(Role::Patient));
        assert_eq!(Role::parse("nurse"), None);
    }

    #[test]
    fn test_dashboard_path() {
        assert_eq!(Role::Doctor.dashboard_path(), "/doctor-dashboard");
        assert_eq!(Role::Patient.dashboard_path(), "/patient-dashboard");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
        let role: Role = serde_json::from_str("\"patient\"").unwrap();
        assert_eq!(role, Role::Patient);
    }
}
