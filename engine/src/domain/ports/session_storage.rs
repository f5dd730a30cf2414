//! Session storage port
//! Durable client-side key-value storage (the localStorage of this client)

use crate::domain::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read a value; `None` if the key was never written or was removed
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}
