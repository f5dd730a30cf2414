//! Infrastructure Layer
//!
//! Adapters implementing the domain ports.
//!
//! ## Adapters
//!
//! - `HttpMonitoringApi`: reqwest client for the remote monitoring API
//! - `FileSessionStorage`: session persisted as a JSON file on disk
//! - `InMemorySessionStorage`: process-local storage for tests and ephemeral use
//!
//! ## Usage
//!
//! ```rust,no_run
//! use automedic_engine::application::UseCaseRegistry;
//! use automedic_engine::infrastructure::{ClientConfig, FileSessionStorage, HttpMonitoringApi};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), automedic_engine::domain::DomainError> {
//! let config = ClientConfig::load()?;
//! let api = Arc::new(HttpMonitoringApi::new(&config)?);
//! let storage = Arc::new(FileSessionStorage::new(&config.session_file));
//! let registry = UseCaseRegistry::new(api, storage);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod file_session_storage;
pub mod http_api;
pub mod in_memory_session_storage;

pub use config::ClientConfig;
pub use file_session_storage::FileSessionStorage;
pub use http_api::HttpMonitoringApi;
pub use in_memory_session_storage::InMemorySessionStorage;
