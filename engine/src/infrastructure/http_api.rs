//! HTTP adapter for the remote monitoring API
//!
//! Auth endpoints answer with `{ status, token?, user }`; collection endpoints wrap
//! their records as `{ data: { data: [...] } }`. The client keeps a cookie store so
//! cookies set at login ride along on later requests.

use crate::constants::api::{LOGIN_PATH, OXIMETER_PATH, ROSTER_PATH, SIGNUP_PATH};
use crate::domain::ports::MonitoringApi;
use crate::domain::{
    AuthResponse, AuthToken, DomainError, LoginCommand, PatientRecord, SignupPayload,
    VitalReading,
};
use crate::infrastructure::ClientConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct HttpMonitoringApi {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpMonitoringApi {
    pub fn new(config: &ClientConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .cookie_store(true)
            .build()
            .map_err(|e| {
                DomainError::InvalidConfiguration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
            timeout: config.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::Network(format!(
                "request to {} timed out after {}s",
                url,
                self.timeout.as_secs()
            ))
        } else {
            DomainError::Network(format!("request to {} failed: {}", url, e))
        }
    }

    async fn authenticate<B>(&self, path: &str, body: &B) -> Result<AuthResponse, DomainError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path);
        debug!(endpoint = %url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;
        let body = parse_body(&text);

        if !status.is_success() {
            let message = rejection_message(status, &body);
            warn!(endpoint = %url, status = status.as_u16(), %message, "Authentication rejected");
            return Err(DomainError::AuthRejected {
                status: status.as_u16(),
                message,
            });
        }

        AuthResponse::from_payload(body)
    }

    async fn fetch_collection<T>(
        &self,
        path: &str,
        token: &AuthToken,
    ) -> Result<Vec<T>, DomainError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(endpoint = %url, "GET");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;
        let body = parse_body(&text);

        if !status.is_success() {
            return Err(DomainError::DataUnavailable(format!(
                "{} answered {}",
                url,
                rejection_message(status, &body)
            )));
        }

        unwrap_collection(body)
    }
}

fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or(Value::Null)
}

/// Server-provided `message`, else `Error <code>: <reason>`
fn rejection_message(status: StatusCode, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        })
}

/// Extract the records from a `{ data: { data: [...] } }` envelope.
/// A null inner collection means the server holds no records.
fn unwrap_collection<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, DomainError> {
    let records = match body.pointer("/data/data") {
        Some(Value::Null) => return Ok(Vec::new()),
        Some(records) => records.clone(),
        None => {
            return Err(DomainError::DataUnavailable(
                "response is missing the data.data envelope".to_string(),
            ))
        }
    };

    serde_json::from_value(records)
        .map_err(|e| DomainError::DataUnavailable(format!("malformed records: {}", e)))
}

#[async_trait]
impl MonitoringApi for HttpMonitoringApi {
    async fn login(&self, credentials: &LoginCommand) -> Result<AuthResponse, DomainError> {
        self.authenticate(LOGIN_PATH, credentials).await
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<AuthResponse, DomainError> {
        self.authenticate(SIGNUP_PATH, payload).await
    }

    async fn fetch_roster(&self, token: &AuthToken) -> Result<Vec<PatientRecord>, DomainError> {
        self.fetch_collection(ROSTER_PATH, token).await
    }

    async fn fetch_readings(&self, token: &AuthToken) -> Result<Vec<VitalReading>, DomainError> {
        self.fetch_collection(OXIMETER_PATH, token).await
    }
}
