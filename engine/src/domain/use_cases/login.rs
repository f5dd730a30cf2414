//! Login use case
//! Authenticates a user and opens a session

use crate::domain::services::AuthGateway;
use crate::domain::{DomainError, Identity, LoginCommand};
use async_trait::async_trait;
use std::sync::Arc;

/// Use case for logging in
#[async_trait]
pub trait Login: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<Identity, DomainError>;
}

/// Implementation of Login use case
pub struct LoginUseCase {
    gateway: Arc<AuthGateway>,
}

impl LoginUseCase {
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Login for LoginUseCase {
    async fn execute(&self, command: LoginCommand) -> Result<Identity, DomainError> {
        self.gateway.login(command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{ApiCall, MockMonitoringApi};
    use crate::domain::services::SessionStore;
    use crate::domain::{AuthResponse, Role};
    use crate::infrastructure::InMemorySessionStorage;
    use serde_json::json;

    fn setup() -> (Arc<MockMonitoringApi>, Arc<SessionStore>, LoginUseCase) {
        let api = Arc::new(MockMonitoringApi::new());
        let session = Arc::new(SessionStore::new(Arc::new(InMemorySessionStorage::new())));
        let gateway = Arc::new(AuthGateway::new(api.clone(), session.clone()));
        (api, session, LoginUseCase::new(gateway))
    }

    #[tokio::test]
    async fn test_login_opens_session() {
        let (api, session, use_case) = setup();
        api.push_login(Ok(AuthResponse::from_payload(json!({
            "token": "abc",
            "user": {"_id": "p1", "role": "patient", "email": "p@example.com"}
        }))
        .unwrap()));

        let identity = use_case
            .execute(LoginCommand::new("p@example.com", "pw", Role::Patient))
            .await
            .unwrap();

        assert_eq!(identity.id, "p1");
        assert!(session.is_authenticated().await);
        assert_eq!(
            api.calls(),
            vec![ApiCall::Login {
                email: "p@example.com".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_login_missing_password_is_not_sent() {
        let (api, session, use_case) = setup();

        let result = use_case
            .execute(LoginCommand::new("p@example.com", "", Role::Patient))
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(api.calls().is_empty());
        assert!(!session.is_authenticated().await);
    }
}
