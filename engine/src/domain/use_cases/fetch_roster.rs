//! FetchRoster use case
//! Retrieves the doctor's patient roster with the session's bearer token.
//!
//! Failures never propagate: they come back as `FetchOutcome::Unavailable`
//! after being logged, so callers can always render with what they hold.

use crate::domain::ports::MonitoringApi;
use crate::domain::services::SessionStore;
use crate::domain::{DomainError, FetchOutcome, PatientRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

#[async_trait]
pub trait FetchRoster: Send + Sync {
    async fn execute(&self) -> FetchOutcome<PatientRecord>;
}

pub struct FetchRosterUseCase {
    api: Arc<dyn MonitoringApi>,
    session: Arc<SessionStore>,
}

impl FetchRosterUseCase {
    pub fn new(api: Arc<dyn MonitoringApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }
}

#[async_trait]
impl FetchRoster for FetchRosterUseCase {
    async fn execute(&self) -> FetchOutcome<PatientRecord> {
        let Some(token) = self.session.token().await else {
            warn!("Roster fetch skipped: no session token");
            return FetchOutcome::Unavailable(DomainError::Unauthenticated);
        };

        match self.api.fetch_roster(&token).await {
            Ok(patients) => {
                debug!(count = patients.len(), "Roster fetched");
                FetchOutcome::Fetched(patients)
            }
            Err(e) => {
                warn!(error = %e, "Roster fetch failed");
                FetchOutcome::Unavailable(e)
            }
        }
    }
}
