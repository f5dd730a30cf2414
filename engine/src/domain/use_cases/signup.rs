//! Signup use case
//! Registers a new patient or doctor account

use crate::domain::services::AuthGateway;
use crate::domain::{AuthResponse, DomainError, SignupCommand};
use async_trait::async_trait;
use std::sync::Arc;

/// Use case for registering a user
#[async_trait]
pub trait Signup: Send + Sync {
    async fn execute(&self, command: SignupCommand) -> Result<AuthResponse, DomainError>;
}

/// Implementation of Signup use case
pub struct SignupUseCase {
    gateway: Arc<AuthGateway>,
}

impl SignupUseCase {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Signup for SignupUseCase {
    async fn execute(&self, command: SignupCommand) -> Result<AuthResponse, DomainError> {
        self.gateway.signup(command).await
    }
}
