//! HttpMonitoringApi against a local stub of the monitoring API

mod common;

use automedic_engine::domain::ports::MonitoringApi;
use automedic_engine::domain::{
    AuthToken, DomainError, LoginCommand, Role, SignupCommand, SignupField,
};
use automedic_engine::infrastructure::HttpMonitoringApi;
use chrono::{TimeZone, Utc};
use common::{start_stub, start_stub_with_delay, ISSUED_TOKEN, SESSION_COOKIE};
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_login_returns_identity_and_token() {
    let stub = start_stub().await;
    let dir = TempDir::new().unwrap();
    let api = HttpMonitoringApi::new(&stub.config(&dir.path().join("s.json"))).unwrap();

    let response = api
        .login(&LoginCommand::new("ada@example.com", "pw", Role::Doctor))
        .await
        .unwrap();

    assert_eq!(response.user.id, "d1");
    assert_eq!(response.user.role, Role::Doctor);
    assert_eq!(response.token, Some(AuthToken::new(ISSUED_TOKEN)));
}

#[tokio::test]
async fn test_login_rejection_carries_server_message() {
    let stub = start_stub().await;
    let dir = TempDir::new().unwrap();
    let api = HttpMonitoringApi::new(&stub.config(&dir.path().join("s.json"))).unwrap();

    let err = api
        .login(&LoginCommand::new("ada@example.com", "wrong", Role::Doctor))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::AuthRejected {
            status: 401,
            message: "Incorrect email or password".to_string()
        }
    );
}

#[tokio::test]
async fn test_signup_payload_and_status_fallback() {
    let stub = start_stub().await;
    let dir = TempDir::new().unwrap();
    let api = HttpMonitoringApi::new(&stub.config(&dir.path().join("s.json"))).unwrap();
    let created_at = Utc.with_ymd_and_hms(2025, 6, 14, 8, 0, 0).unwrap();

    let patient = SignupCommand::new(Role::Patient)
        .with(SignupField::Email, "new@example.com")
        .with(SignupField::FirstName, "Bola")
        .with(SignupField::Password, "pw")
        .with(SignupField::PasswordConfirm, "pw");
    let response = api.signup(&patient.to_payload(created_at)).await.unwrap();
    assert_eq!(response.user.id, "new-1");
    assert_eq!(response.token, None);

    let taken = SignupCommand::new(Role::Patient)
        .with(SignupField::Email, "taken@example.com")
        .with(SignupField::Password, "pw")
        .with(SignupField::PasswordConfirm, "pw");
    let err = api.signup(&taken.to_payload(created_at)).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::AuthRejected {
            status: 400,
            message: "Error 400: Bad Request".to_string()
        }
    );

    let recorded = stub.recorded();
    let body = &recorded.signup_bodies[0];
    assert_eq!(body["role"], "patient");
    assert_eq!(body["passwordConfirm"], "pw");
    assert_eq!(body["patientInfo"]["medicalHistory"], "");
    assert_eq!(body["patientInfo"]["emergencyContact"], json!({}));
    assert!(body.get("doctorInfo").is_none());
    assert!(body["createdAt"].as_str().unwrap().starts_with("2025-06-14T08:00:00"));
}

#[tokio::test]
async fn test_collections_are_unwrapped_with_bearer_token() {
    let stub = start_stub().await;
    stub.set_roster(json!([
        {"_id": "p1", "firstName": "Bola", "lastName": "Ade", "dateOfBirth": "1990-05-01",
         "active": true, "patientInfo": {"medicalHistory": "Asthma"}}
    ]));
    stub.set_readings(json!([
        {"_id": "r1", "patientId": {"_id": "p1", "firstName": "Bola"}, "heartRate": 72,
         "oxygenPercentage": 98, "timestamp": "2025-06-14T08:00:00.000Z"},
        {"_id": "r2", "patientId": "p1", "heartRate": 75,
         "oxygenPercentage": 97, "timestamp": "2025-06-14T08:05:00.000Z"}
    ]));
    let dir = TempDir::new().unwrap();
    let api = HttpMonitoringApi::new(&stub.config(&dir.path().join("s.json"))).unwrap();
    let token = AuthToken::new(ISSUED_TOKEN);

    let roster = api.fetch_roster(&token).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].condition(), "Asthma");

    let readings = api.fetch_readings(&token).await.unwrap();
    assert_eq!(readings.len(), 2);
    assert!(readings.iter().all(|r| r.patient_id == "p1"));

    let recorded = stub.recorded();
    assert!(recorded
        .authorization
        .iter()
        .all(|a| a == &format!("Bearer {}", ISSUED_TOKEN)));
}

#[tokio::test]
async fn test_empty_collection_is_not_an_error() {
    let stub = start_stub().await;
    let dir = TempDir::new().unwrap();
    let api = HttpMonitoringApi::new(&stub.config(&dir.path().join("s.json"))).unwrap();

    let roster = api.fetch_roster(&AuthToken::new(ISSUED_TOKEN)).await.unwrap();

    assert!(roster.is_empty());
}

#[tokio::test]
async fn test_rejected_fetch_is_data_unavailable() {
    let stub = start_stub().await;
    let dir = TempDir::new().unwrap();
    let api = HttpMonitoringApi::new(&stub.config(&dir.path().join("s.json"))).unwrap();

    let err = api
        .fetch_readings(&AuthToken::new("expired"))
        .await
        .unwrap_err();

    match err {
        DomainError::DataUnavailable(message) => assert!(message.contains("Invalid token")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_cookie_is_replayed() {
    let stub = start_stub().await;
    let dir = TempDir::new().unwrap();
    let api = HttpMonitoringApi::new(&stub.config(&dir.path().join("s.json"))).unwrap();

    api.login(&LoginCommand::new("ada@example.com", "pw", Role::Doctor))
        .await
        .unwrap();
    api.fetch_roster(&AuthToken::new(ISSUED_TOKEN)).await.unwrap();

    let recorded = stub.recorded();
    assert!(recorded.cookies.iter().any(|c| c.contains(SESSION_COOKIE)));
}

#[tokio::test]
async fn test_timeout_maps_to_network_error() {
    let stub = start_stub_with_delay(Duration::from_secs(3)).await;
    let dir = TempDir::new().unwrap();
    let mut config = stub.config(&dir.path().join("s.json"));
    config.request_timeout_secs = 1;
    let api = HttpMonitoringApi::new(&config).unwrap();

    let err = api
        .fetch_roster(&AuthToken::new(ISSUED_TOKEN))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Network(ref m) if m.contains("timed out")));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = TempDir::new().unwrap();
    let config = automedic_engine::infrastructure::ClientConfig {
        api_base_url: format!("http://{}/api/v1", addr),
        request_timeout_secs: 2,
        session_file: dir.path().join("s.json"),
    };
    let api = HttpMonitoringApi::new(&config).unwrap();

    let err = api
        .login(&LoginCommand::new("ada@example.com", "pw", Role::Doctor))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Network(_)));
}
