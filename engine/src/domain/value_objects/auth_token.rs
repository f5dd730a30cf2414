//! Bearer credential and the login/signup response that carries it

use crate::domain::{DomainError, Identity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token issued by the server.
///
/// Never parsed or validated client-side. `Debug` is redacted so the token
/// cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for the `Authorization` header and persistence only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Successful response from the login or signup endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub user: Identity,
    pub token: Option<AuthToken>,
    /// Full server payload, returned to signup callers as-is
    pub payload: serde_json::Value,
}

impl AuthResponse {
    /// Extract `user` and the optional `token` from a 2xx response body
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, DomainError> {
        let user = payload
            .get("user")
            .cloned()
            .ok_or_else(|| DomainError::DataUnavailable("response has no 'user' field".to_string()))?;
        let user: Identity = serde_json::from_value(user)
            .map_err(|e| DomainError::DataUnavailable(format!("malformed user: {}", e)))?;

        let token = payload
            .get("token")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .map(AuthToken::new);

        Ok(Self {
            user,
            token,
            payload,
        })
    }
}
