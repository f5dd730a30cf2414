//! Scripted MonitoringApi for tests
//!
//! Responses are queued per endpoint and consumed in call order. A queued
//! response may carry a delay so tests can force out-of-order completion.

use crate::domain::ports::MonitoringApi;
use crate::domain::{
    AuthResponse, AuthToken, DomainError, LoginCommand, PatientRecord, SignupPayload,
    VitalReading,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A call observed by the mock, with the credential it carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login { email: String },
    Signup { email: String },
    FetchRoster { token: String },
    FetchReadings { token: String },
}

struct Scripted<T> {
    result: Result<T, DomainError>,
    delay: Duration,
}

#[derive(Default)]
pub struct MockMonitoringApi {
    login: Mutex<VecDeque<Scripted<AuthResponse>>>,
    signup: Mutex<VecDeque<Scripted<AuthResponse>>>,
    roster: Mutex<VecDeque<Scripted<Vec<PatientRecord>>>>,
    readings: Mutex<VecDeque<Scripted<Vec<VitalReading>>>>,
    calls: Mutex<Vec<ApiCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn play<T>(
    queue: &Mutex<VecDeque<Scripted<T>>>,
    fallback: impl FnOnce() -> Result<T, DomainError>,
) -> Result<T, DomainError> {
    let next = lock(queue).pop_front();
    match next {
        Some(scripted) => {
            if !scripted.delay.is_zero() {
                tokio::time::sleep(scripted.delay).await;
            }
            scripted.result
        }
        None => fallback(),
    }
}

impl MockMonitoringApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_login(&self, result: Result<AuthResponse, DomainError>) -> &Self {
        lock(&self.login).push_back(Scripted {
            result,
            delay: Duration::ZERO,
        });
        self
    }

    pub fn push_signup(&self, result: Result<AuthResponse, DomainError>) -> &Self {
        lock(&self.signup).push_back(Scripted {
            result,
            delay: Duration::ZERO,
        });
        self
    }

    pub fn push_roster(&self, result: Result<Vec<PatientRecord>, DomainError>) -> &Self {
        self.push_roster_delayed(result, Duration::ZERO)
    }

    pub fn push_roster_delayed(
        &self,
        result: Result<Vec<PatientRecord>, DomainError>,
        delay: Duration,
    ) -> &Self {
        lock(&self.roster).push_back(Scripted { result, delay });
        self
    }

    pub fn push_readings(&self, result: Result<Vec<VitalReading>, DomainError>) -> &Self {
        self.push_readings_delayed(result, Duration::ZERO)
    }

    pub fn push_readings_delayed(
        &self,
        result: Result<Vec<VitalReading>, DomainError>,
        delay: Duration,
    ) -> &Self {
        lock(&self.readings).push_back(Scripted { result, delay });
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: ApiCall) {
        lock(&self.calls).push(call);
    }
}

#[async_trait]
impl MonitoringApi for MockMonitoringApi {
    async fn login(&self, credentials: &LoginCommand) -> Result<AuthResponse, DomainError> {
        self.record(ApiCall::Login {
            email: credentials.email.clone(),
        });
        play(&self.login, || {
            Err(DomainError::AuthRejected {
                status: 401,
                message: "no scripted login response".to_string(),
            })
        })
        .await
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<AuthResponse, DomainError> {
        self.record(ApiCall::Signup {
            email: payload.email.clone(),
        });
        play(&self.signup, || {
            Err(DomainError::AuthRejected {
                status: 400,
                message: "no scripted signup response".to_string(),
            })
        })
        .await
    }

    async fn fetch_roster(&self, token: &AuthToken) -> Result<Vec<PatientRecord>, DomainError> {
        self.record(ApiCall::FetchRoster {
            token: token.expose().to_string(),
        });
        play(&self.roster, || Ok(Vec::new())).await
    }

    async fn fetch_readings(&self, token: &AuthToken) -> Result<Vec<VitalReading>, DomainError> {
        self.record(ApiCall::FetchReadings {
            token: token.expose().to_string(),
        });
        play(&self.readings, || Ok(Vec::new())).await
    }
}
