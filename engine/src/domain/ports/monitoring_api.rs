//! Remote monitoring API port
//! Interface to the server that owns users, rosters and oximeter records

use crate::domain::{
    AuthResponse, AuthToken, DomainError, LoginCommand, PatientRecord, SignupPayload,
    VitalReading,
};
use async_trait::async_trait;

#[async_trait]
pub trait MonitoringApi: Send + Sync {
    /// `POST /users/auth/login`
    ///
    /// Non-2xx answers map to `AuthRejected`, transport failures to `Network`.
    async fn login(&self, credentials: &LoginCommand) -> Result<AuthResponse, DomainError>;

    /// `POST /users/auth/signup`
    async fn signup(&self, payload: &SignupPayload) -> Result<AuthResponse, DomainError>;

    /// `GET /users/doctor/`, bearer-authenticated
    ///
    /// An empty roster is `Ok(vec![])`; a failed or malformed fetch is an error.
    async fn fetch_roster(&self, token: &AuthToken) -> Result<Vec<PatientRecord>, DomainError>;

    /// `GET /oximeter/`, bearer-authenticated
    async fn fetch_readings(&self, token: &AuthToken) -> Result<Vec<VitalReading>, DomainError>;
}
