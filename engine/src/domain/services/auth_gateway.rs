//! Auth Gateway
//!
//! Performs login and signup against the remote API and updates the session
//! store on success. Exposes a loading flag and the last error for display.
//! Concurrent calls are not de-duplicated; each runs independently and the
//! loading flag stays raised while any of them is pending.

use crate::domain::ports::MonitoringApi;
use crate::domain::services::SessionStore;
use crate::domain::{AuthResponse, DomainError, Identity, LoginCommand, SignupCommand};
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

pub struct AuthGateway {
    api: Arc<dyn MonitoringApi>,
    session: Arc<SessionStore>,
    pending: AtomicUsize,
    last_error: Mutex<Option<String>>,
}

/// Keeps the loading flag raised for the lifetime of one call
struct PendingGuard<'a>(&'a AtomicUsize);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AuthGateway {
    pub fn new(api: Arc<dyn MonitoringApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            pending: AtomicUsize::new(0),
            last_error: Mutex::new(None),
        }
    }

    /// True while a login or signup is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    /// Message of the most recent failed login/signup, cleared when a new one starts
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn begin(&self) -> PendingGuard<'_> {
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.set_error(None);
        PendingGuard(&self.pending)
    }

    fn set_error(&self, message: Option<String>) {
        *self
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = message;
    }

    fn record<T>(&self, result: Result<T, DomainError>) -> Result<T, DomainError> {
        if let Err(ref e) = result {
            self.set_error(Some(e.to_string()));
        }
        result
    }

    /// Authenticate and persist identity plus token.
    /// On failure the session store is left untouched.
    pub async fn login(&self, command: LoginCommand) -> Result<Identity, DomainError> {
        let _pending = self.begin();
        let result = self.login_inner(&command).await;
        self.record(result)
    }

    async fn login_inner(&self, command: &LoginCommand) -> Result<Identity, DomainError> {
        command.validate()?;

        debug!(email = %command.email, role = %command.role, "Sending login request");
        let response = match self.api.login(command).await {
            Ok(response) => response,
            Err(e) => {
                warn!(email = %command.email, error = %e, "Login failed");
                return Err(e);
            }
        };

        self.session
            .save(response.user.clone(), response.token.clone())
            .await?;

        info!(user_id = %response.user.id, role = %response.user.role, "Logged in");
        Ok(response.user)
    }

    /// Register a new user.
    ///
    /// Role-specific fields are validated before anything is sent. On success
    /// identity and token (when the server issues one) are persisted and the
    /// full server payload is returned.
    pub async fn signup(&self, command: SignupCommand) -> Result<AuthResponse, DomainError> {
        let _pending = self.begin();
        let result = self.signup_inner(&command).await;
        self.record(result)
    }

    async fn signup_inner(&self, command: &SignupCommand) -> Result<AuthResponse, DomainError> {
        if let Err(e) = command.validate() {
            debug!(email = %command.email, error = %e, "Signup rejected before sending");
            return Err(e);
        }

        let payload = command.to_payload(Utc::now());
        debug!(email = %payload.email, role = %payload.role, "Sending signup request");

        let response = match self.api.signup(&payload).await {
            Ok(response) => response,
            Err(e) => {
                warn!(email = %command.email, error = %e, "Signup failed");
                return Err(e);
            }
        };

        self.session
            .save(response.user.clone(), response.token.clone())
            .await?;

        info!(user_id = %response.user.id, role = %response.user.role, "Signed up");
        Ok(response)
    }

    /// Clear the session from memory and durable storage
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.set_error(None);
        self.session.clear().await
    }
}
