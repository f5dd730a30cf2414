//! Use Case Registry
//! Central composition root for all use cases (Dependency Injection container)

use crate::domain::ports::{MonitoringApi, SessionStorage};
use crate::domain::services::{AuthGateway, SessionStore, TelemetrySnapshot};
use crate::domain::use_cases::{
    FetchReadings, FetchReadingsUseCase, FetchRoster, FetchRosterUseCase, GetVitalHistory,
    GetVitalHistoryUseCase, Login, LoginUseCase, Logout, LogoutUseCase, RefreshDashboard,
    RefreshDashboardUseCase, RestoreSession, RestoreSessionUseCase, Signup, SignupUseCase,
};
use std::sync::Arc;

/// Registry for all application use cases.
/// One registry corresponds to one client session context.
pub struct UseCaseRegistry {
    // Command use cases (modify session state)
    login: Arc<dyn Login>,
    signup: Arc<dyn Signup>,
    logout: Arc<dyn Logout>,
    restore_session: Arc<dyn RestoreSession>,

    // Query use cases (read remote or cached telemetry)
    fetch_roster: Arc<dyn FetchRoster>,
    fetch_readings: Arc<dyn FetchReadings>,
    refresh_dashboard: Arc<dyn RefreshDashboard>,
    get_vital_history: Arc<dyn GetVitalHistory>,

    // Shared state (exposed for front ends)
    session: Arc<SessionStore>,
    gateway: Arc<AuthGateway>,
    snapshot: Arc<TelemetrySnapshot>,
}

impl UseCaseRegistry {
    /// Create a new registry with all use cases configured
    ///
    /// # Arguments
    ///
    /// * `api` - Remote monitoring API adapter
    /// * `storage` - Durable session storage adapter
    pub fn new(api: Arc<dyn MonitoringApi>, storage: Arc<dyn SessionStorage>) -> Self {
        let session = Arc::new(SessionStore::new(storage));
        let gateway = Arc::new(AuthGateway::new(api.clone(), session.clone()));
        let snapshot = Arc::new(TelemetrySnapshot::new());

        let login = Arc::new(LoginUseCase::new(gateway.clone()));
        let signup = Arc::new(SignupUseCase::new(gateway.clone()));
        let logout = Arc::new(LogoutUseCase::new(gateway.clone(), snapshot.clone()));
        let restore_session = Arc::new(RestoreSessionUseCase::new(session.clone()));

        let fetch_roster: Arc<dyn FetchRoster> =
            Arc::new(FetchRosterUseCase::new(api.clone(), session.clone()));
        let fetch_readings: Arc<dyn FetchReadings> =
            Arc::new(FetchReadingsUseCase::new(api, session.clone()));

        let refresh_dashboard = Arc::new(RefreshDashboardUseCase::new(
            session.clone(),
            snapshot.clone(),
            fetch_roster.clone(),
            fetch_readings.clone(),
        ));
        let get_vital_history = Arc::new(GetVitalHistoryUseCase::new(
            session.clone(),
            snapshot.clone(),
        ));

        Self {
            login,
            signup,
            logout,
            restore_session,
            fetch_roster,
            fetch_readings,
            refresh_dashboard,
            get_vital_history,
            session,
            gateway,
            snapshot,
        }
    }

    // ===== Command Use Cases =====

    pub fn login(&self) -> Arc<dyn Login> {
        self.login.clone()
    }

    pub fn signup(&self) -> Arc<dyn Signup> {
        self.signup.clone()
    }

    pub fn logout(&self) -> Arc<dyn Logout> {
        self.logout.clone()
    }

    pub fn restore_session(&self) -> Arc<dyn RestoreSession> {
        self.restore_session.clone()
    }

    // ===== Query Use Cases =====

    pub fn fetch_roster(&self) -> Arc<dyn FetchRoster> {
        self.fetch_roster.clone()
    }

    pub fn fetch_readings(&self) -> Arc<dyn FetchReadings> {
        self.fetch_readings.clone()
    }

    pub fn refresh_dashboard(&self) -> Arc<dyn RefreshDashboard> {
        self.refresh_dashboard.clone()
    }

    pub fn get_vital_history(&self) -> Arc<dyn GetVitalHistory> {
        self.get_vital_history.clone()
    }

    // ===== Shared State =====

    /// The session store backing every use case of this registry
    pub fn session(&self) -> Arc<SessionStore> {
        self.session.clone()
    }

    /// Exposes the loading flag and last auth error
    pub fn auth_gateway(&self) -> Arc<AuthGateway> {
        self.gateway.clone()
    }

    pub fn snapshot(&self) -> Arc<TelemetrySnapshot> {
        self.snapshot.clone()
    }
}
