//! Domain error taxonomy

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The request could not complete (connect failure, timeout, broken body)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered a login/signup with a non-2xx status
    #[error("{message}")]
    AuthRejected { status: u16, message: String },

    /// A client-side check failed before anything was sent
    #[error("validation failed: {0}")]
    Validation(String),

    /// Roster or readings could not be fetched or had an unexpected shape
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("not authenticated")]
    Unauthenticated,

    #[error("patient not found: {0}")]
    PatientNotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

impl DomainError {
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, DomainError::AuthRejected { .. })
    }
}
