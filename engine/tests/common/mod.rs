//! Shared test utilities for integration tests
//!
//! Each test starts its own stub of the monitoring API on an ephemeral port, so
//! tests run in parallel without interference. The stub records every request
//! body and the cookie/authorization headers it saw.

#![allow(dead_code)]

use automedic_engine::infrastructure::ClientConfig;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const VALID_PASSWORD: &str = "pw";
pub const ISSUED_TOKEN: &str = "tok-1";
pub const SESSION_COOKIE: &str = "jwt=cookie-1";

#[derive(Default)]
pub struct Recorded {
    pub signup_bodies: Vec<Value>,
    pub authorization: Vec<String>,
    pub cookies: Vec<String>,
}

#[derive(Clone)]
pub struct StubState {
    pub recorded: Arc<Mutex<Recorded>>,
    pub roster: Arc<Mutex<Value>>,
    pub readings: Arc<Mutex<Value>>,
    pub delay: Duration,
}

pub struct StubServer {
    pub addr: SocketAddr,
    pub state: StubState,
}

impl StubServer {
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    pub fn config(&self, session_file: &Path) -> ClientConfig {
        ClientConfig {
            api_base_url: self.base_url(),
            request_timeout_secs: 5,
            session_file: session_file.to_path_buf(),
        }
    }

    pub fn set_roster(&self, records: Value) {
        *self.state.roster.lock().unwrap() = records;
    }

    pub fn set_readings(&self, records: Value) {
        *self.state.readings.lock().unwrap() = records;
    }

    pub fn recorded(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.state.recorded.lock().unwrap()
    }
}

pub async fn start_stub() -> StubServer {
    start_stub_with_delay(Duration::ZERO).await
}

/// Stub whose collection endpoints answer only after `delay`
pub async fn start_stub_with_delay(delay: Duration) -> StubServer {
    let state = StubState {
        recorded: Arc::new(Mutex::new(Recorded::default())),
        roster: Arc::new(Mutex::new(json!([]))),
        readings: Arc::new(Mutex::new(json!([]))),
        delay,
    };

    let app = Router::new()
        .route("/api/v1/users/auth/login", post(login))
        .route("/api/v1/users/auth/signup", post(signup))
        .route("/api/v1/users/doctor/", get(roster))
        .route("/api/v1/oximeter/", get(readings))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer { addr, state }
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] != VALID_PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "fail", "message": "Incorrect email or password"})),
        )
            .into_response();
    }

    let user = json!({
        "_id": "d1",
        "firstName": "Ada",
        "lastName": "Obi",
        "email": body["email"],
        "role": body["role"],
    });
    (
        StatusCode::OK,
        [(header::SET_COOKIE, format!("{}; Path=/", SESSION_COOKIE))],
        Json(json!({"status": "success", "token": ISSUED_TOKEN, "user": user})),
    )
        .into_response()
}

async fn signup(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state
        .recorded
        .lock()
        .unwrap()
        .signup_bodies
        .push(body.clone());

    if body["email"] == "taken@example.com" {
        // No JSON body: the client must fall back to the status line
        return (StatusCode::BAD_REQUEST, "duplicate").into_response();
    }

    let user = json!({
        "_id": "new-1",
        "firstName": body["firstName"],
        "email": body["email"],
        "role": body["role"],
    });
    (
        StatusCode::CREATED,
        Json(json!({"status": "success", "user": user})),
    )
        .into_response()
}

fn record_headers(state: &StubState, headers: &HeaderMap) -> bool {
    let mut recorded = state.recorded.lock().unwrap();
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if let Some(cookie) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        recorded.cookies.push(cookie.to_string());
    }
    let authorized = auth == format!("Bearer {}", ISSUED_TOKEN);
    recorded.authorization.push(auth);
    authorized
}

async fn collection(state: &StubState, headers: &HeaderMap, records: Value) -> Response {
    if !record_headers(state, headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "fail", "message": "Invalid token"})),
        )
            .into_response();
    }
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    Json(json!({"status": "success", "data": {"data": records}})).into_response()
}

async fn roster(State(state): State<StubState>, headers: HeaderMap) -> Response {
    let records = state.roster.lock().unwrap().clone();
    collection(&state, &headers, records).await
}

async fn readings(State(state): State<StubState>, headers: HeaderMap) -> Response {
    let records = state.readings.lock().unwrap().clone();
    collection(&state, &headers, records).await
}
