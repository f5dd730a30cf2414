//! RestoreSession use case
//! Rehydrates the session from durable storage at startup

use crate::domain::services::SessionStore;
use crate::domain::{DomainError, Identity};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait RestoreSession: Send + Sync {
    async fn execute(&self) -> Result<Option<Identity>, DomainError>;
}

pub struct RestoreSessionUseCase {
    session: Arc<SessionStore>,
}

impl RestoreSessionUseCase {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl RestoreSession for RestoreSessionUseCase {
    async fn execute(&self) -> Result<Option<Identity>, DomainError> {
        self.session.restore().await
    }
}
