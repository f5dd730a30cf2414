//! GetVitalHistory use case
//! Query for one patient's recent readings, served from the last refresh

use crate::domain::services::{SessionStore, TelemetrySnapshot};
use crate::domain::{DomainError, VitalHistoryQuery, VitalHistoryResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Use case for a patient's vital history
#[async_trait]
pub trait GetVitalHistory: Send + Sync {
    async fn execute(&self, query: VitalHistoryQuery)
        -> Result<VitalHistoryResponse, DomainError>;
}

/// Implementation of GetVitalHistory use case
pub struct GetVitalHistoryUseCase {
    session: Arc<SessionStore>,
    snapshot: Arc<TelemetrySnapshot>,
}

impl GetVitalHistoryUseCase {
    pub fn new(session: Arc<SessionStore>, snapshot: Arc<TelemetrySnapshot>) -> Self {
        Self { session, snapshot }
    }
}

#[async_trait]
impl GetVitalHistory for GetVitalHistoryUseCase {
    async fn execute(
        &self,
        query: VitalHistoryQuery,
    ) -> Result<VitalHistoryResponse, DomainError> {
        let identity = self
            .session
            .identity()
            .await
            .ok_or(DomainError::Unauthenticated)?;
        self.snapshot.scope_to(&identity.id);
        self.snapshot.history(&query)
    }
}
