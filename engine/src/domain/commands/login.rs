//! Login command

use crate::domain::{DomainError, Role};
use serde::Serialize;

/// Credentials sent to the login endpoint
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.trim().is_empty() {
            return Err(DomainError::Validation("email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(DomainError::Validation("password is required".to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}
