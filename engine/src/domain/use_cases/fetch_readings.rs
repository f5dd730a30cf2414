//! FetchReadings use case
//! Retrieves oximeter readings with the session's bearer token

use crate::domain::ports::MonitoringApi;
use crate::domain::services::SessionStore;
use crate::domain::{DomainError, FetchOutcome, VitalReading};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

#[async_trait]
pub trait FetchReadings: Send + Sync {
    async fn execute(&self) -> FetchOutcome<VitalReading>;
}

pub struct FetchReadingsUseCase {
    api: Arc<dyn MonitoringApi>,
    session: Arc<SessionStore>,
}

impl FetchReadingsUseCase {
    pub fn new(api: Arc<dyn MonitoringApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }
}

#[async_trait]
impl FetchReadings for FetchReadingsUseCase {
    async fn execute(&self) -> FetchOutcome<VitalReading> {
        let Some(token) = self.session.token().await else {
            warn!("Readings fetch skipped: no session token");
            return FetchOutcome::Unavailable(DomainError::Unauthenticated);
        };

        let result = self.api.fetch_readings(&token).await;
        match &result {
            Ok(readings) => debug!(count = readings.len(), "Readings fetched"),
            Err(e) => warn!(error = %e, "Readings fetch failed"),
        }
        result.into()
    }
}
