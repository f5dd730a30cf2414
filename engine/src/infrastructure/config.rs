//! Client configuration
//!
//! Loaded from an optional YAML file, then overridden by environment variables.
//!
//! Precedence (first match wins for each field):
//! 1. `AUTOMEDIC_API_URL` / `AUTOMEDIC_TIMEOUT_SECS` / `AUTOMEDIC_SESSION_FILE`
//! 2. The YAML file named by `AUTOMEDIC_CONFIG`, else `$HOME/.automedic/config.yaml` if present
//! 3. Built-in defaults

use crate::constants::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::constants::session::{DEFAULT_SESSION_DIR, DEFAULT_SESSION_FILE};
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the monitoring API, without trailing slash
    pub api_base_url: String,

    pub request_timeout_secs: u64,

    /// Where the session (identity + token) is persisted
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: default_session_dir().join(DEFAULT_SESSION_FILE),
        }
    }
}

fn default_session_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(DEFAULT_SESSION_DIR),
        None => PathBuf::from(DEFAULT_SESSION_DIR),
    }
}

impl ClientConfig {
    /// Resolve the full configuration from file and environment
    pub fn load() -> Result<Self, DomainError> {
        let mut config = match Self::config_path() {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Config file to read, if any.
    /// An explicit `AUTOMEDIC_CONFIG` is returned even if it does not exist.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os("AUTOMEDIC_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let default = default_session_dir().join(DEFAULT_CONFIG_FILE);
        default.is_file().then_some(default)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidConfiguration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            DomainError::InvalidConfiguration(format!(
                "Failed to parse YAML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "Loaded client config file");
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<(), DomainError> {
        if let Ok(url) = env::var("AUTOMEDIC_API_URL") {
            self.api_base_url = url;
        }

        if let Ok(raw) = env::var("AUTOMEDIC_TIMEOUT_SECS") {
            self.request_timeout_secs = raw.trim().parse().map_err(|_| {
                DomainError::InvalidConfiguration(format!(
                    "AUTOMEDIC_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
        }

        if let Some(path) = env::var_os("AUTOMEDIC_SESSION_FILE") {
            self.session_file = PathBuf::from(path);
        }

        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.api_base_url.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "api_base_url cannot be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(DomainError::InvalidConfiguration(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
