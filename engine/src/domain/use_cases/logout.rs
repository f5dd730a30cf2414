//! Logout use case
//! Ends the current session locally and drops the telemetry held for it;
//! the server is not contacted

use crate::domain::services::{AuthGateway, TelemetrySnapshot};
use crate::domain::DomainError;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Logout: Send + Sync {
    async fn execute(&self) -> Result<(), DomainError>;
}

pub struct LogoutUseCase {
    gateway: Arc<AuthGateway>,
    snapshot: Arc<TelemetrySnapshot>,
}

impl LogoutUseCase {
    pub fn new(gateway: Arc<AuthGateway>, snapshot: Arc<TelemetrySnapshot>) -> Self {
        Self { gateway, snapshot }
    }
}

#[async_trait]
impl Logout for LogoutUseCase {
    async fn execute(&self) -> Result<(), DomainError> {
        self.snapshot.reset();
        self.gateway.logout().await
    }
}
