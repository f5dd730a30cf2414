//! RefreshDashboard use case
//! Fetches roster and readings concurrently and re-derives the patient views.
//!
//! Each fetch takes its ticket before it is issued and completes into the shared
//! snapshot as soon as it lands, so an older refresh finishing late never
//! overwrites a newer one. The returned response is derived from the snapshot
//! after both fetches of this refresh have completed.

use crate::domain::services::{SessionStore, TelemetrySnapshot};
use crate::domain::use_cases::{FetchReadings, FetchRoster};
use crate::domain::{DashboardResponse, DomainError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

#[async_trait]
pub trait RefreshDashboard: Send + Sync {
    async fn execute(&self) -> Result<DashboardResponse, DomainError>;
}

pub struct RefreshDashboardUseCase {
    session: Arc<SessionStore>,
    snapshot: Arc<TelemetrySnapshot>,
    fetch_roster: Arc<dyn FetchRoster>,
    fetch_readings: Arc<dyn FetchReadings>,
}

impl RefreshDashboardUseCase {
    pub fn new(
        session: Arc<SessionStore>,
        snapshot: Arc<TelemetrySnapshot>,
        fetch_roster: Arc<dyn FetchRoster>,
        fetch_readings: Arc<dyn FetchReadings>,
    ) -> Self {
        Self {
            session,
            snapshot,
            fetch_roster,
            fetch_readings,
        }
    }
}

#[async_trait]
impl RefreshDashboard for RefreshDashboardUseCase {
    async fn execute(&self) -> Result<DashboardResponse, DomainError> {
        let identity = self
            .session
            .identity()
            .await
            .ok_or(DomainError::Unauthenticated)?;
        self.snapshot.scope_to(&identity.id);

        let roster_ticket = self.snapshot.begin_roster();
        let readings_ticket = self.snapshot.begin_readings();
        debug!(?roster_ticket, ?readings_ticket, "Refreshing dashboard");

        let roster = async {
            let outcome = self.fetch_roster.execute().await;
            self.snapshot.complete_roster(roster_ticket, outcome);
        };
        let readings = async {
            let outcome = self.fetch_readings.execute().await;
            self.snapshot.complete_readings(readings_ticket, outcome);
        };
        tokio::join!(roster, readings);

        let dashboard = self.snapshot.dashboard();
        info!(
            total = dashboard.summary.total,
            active = dashboard.summary.active,
            critical = dashboard.summary.critical,
            "Dashboard refreshed"
        );
        Ok(dashboard)
    }
}
