//! Session Store
//!
//! Explicit, injectable session context. Holds the active identity and token in
//! memory and mirrors them to durable storage. `restore`, `save` and `clear`
//! are the only mutators; everything else reads.

use crate::constants::session::{TOKEN_KEY, USER_KEY};
use crate::domain::ports::SessionStorage;
use crate::domain::{AuthToken, DomainError, Identity};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// The single active session of this client
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub identity: Identity,
    pub token: Option<AuthToken>,
}

pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
        }
    }

    /// Load the persisted session at startup. No network call.
    ///
    /// A persisted identity that no longer parses is treated as absent.
    pub async fn restore(&self) -> Result<Option<Identity>, DomainError> {
        let Some(raw_user) = self.storage.get(USER_KEY).await? else {
            debug!("No persisted session");
            *self.current.write().await = None;
            return Ok(None);
        };

        let identity: Identity = match serde_json::from_str(&raw_user) {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable persisted identity");
                *self.current.write().await = None;
                return Ok(None);
            }
        };

        let token = self
            .storage
            .get(TOKEN_KEY)
            .await?
            .filter(|t| !t.is_empty())
            .map(AuthToken::new);

        info!(
            user_id = %identity.id,
            role = %identity.role,
            has_token = token.is_some(),
            "Session restored"
        );

        *self.current.write().await = Some(Session {
            identity: identity.clone(),
            token,
        });

        Ok(Some(identity))
    }

    /// Persist identity and token, replacing any prior session.
    ///
    /// Without a token the stale persisted token is removed, so a saved session
    /// never pairs one user with another user's credential. When the token
    /// cannot be written the prior persisted identity is put back and the
    /// in-memory session is left unchanged.
    pub async fn save(
        &self,
        identity: Identity,
        token: Option<AuthToken>,
    ) -> Result<(), DomainError> {
        let raw_user = serde_json::to_string(&identity)
            .map_err(|e| DomainError::Storage(format!("failed to serialize identity: {}", e)))?;

        let previous_user = self.storage.get(USER_KEY).await?;
        self.storage.set(USER_KEY, &raw_user).await?;
        let token_written = match &token {
            Some(token) => self.storage.set(TOKEN_KEY, token.expose()).await,
            None => self.storage.remove(TOKEN_KEY).await,
        };
        if let Err(e) = token_written {
            let rollback = match &previous_user {
                Some(raw) => self.storage.set(USER_KEY, raw).await,
                None => self.storage.remove(USER_KEY).await,
            };
            if let Err(rollback_err) = rollback {
                warn!(error = %rollback_err, "Failed to roll back persisted identity");
            }
            return Err(e);
        }

        info!(
            user_id = %identity.id,
            role = %identity.role,
            has_token = token.is_some(),
            "Session saved"
        );

        *self.current.write().await = Some(Session { identity, token });
        Ok(())
    }

    /// Drop the session from memory and from durable storage.
    /// Never contacts the remote system.
    pub async fn clear(&self) -> Result<(), DomainError> {
        // Memory first: a storage failure must not leave the user logged in
        let previous = self.current.write().await.take();

        self.storage.remove(USER_KEY).await?;
        self.storage.remove(TOKEN_KEY).await?;

        if let Some(session) = previous {
            info!(user_id = %session.identity.id, "Session cleared");
        }
        Ok(())
    }

    pub async fn session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|s| s.identity.clone())
    }

    pub async fn token(&self) -> Option<AuthToken> {
        self.current
            .read()
            .await
            .as_ref()
            .and_then(|s| s.token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}
