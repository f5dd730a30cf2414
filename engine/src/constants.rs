//! Application-wide constants and default values
//!
//! Centralizes endpoint paths, storage keys and clinical thresholds

/// Remote API defaults
pub mod api {
    /// Base URL used when neither the config file nor the environment sets one
    pub const DEFAULT_BASE_URL: &str = "http://localhost:3500/api/v1";

    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub const LOGIN_PATH: &str = "/users/auth/login";
    pub const SIGNUP_PATH: &str = "/users/auth/signup";
    pub const OXIMETER_PATH: &str = "/oximeter/";
    pub const ROSTER_PATH: &str = "/users/doctor/";
}

/// Persisted session layout
pub mod session {
    /// Storage key holding the serialized identity
    pub const USER_KEY: &str = "user";

    /// Storage key holding the bearer token
    pub const TOKEN_KEY: &str = "token";

    /// Directory under $HOME holding the session file
    pub const DEFAULT_SESSION_DIR: &str = ".automedic";

    pub const DEFAULT_SESSION_FILE: &str = "session.json";
}

/// Clinical thresholds for heart rate (BPM) and oxygen saturation (%)
pub mod vitals {
    pub const HEART_RATE_CRITICAL_HIGH: i32 = 100;
    pub const HEART_RATE_CRITICAL_LOW: i32 = 60;
    pub const OXYGEN_CRITICAL_LOW: i32 = 95;

    pub const HEART_RATE_WARNING_HIGH: i32 = 90;
    pub const OXYGEN_WARNING_LOW: i32 = 98;

    /// Number of readings shown in a patient's vital history
    pub const HISTORY_DISPLAY_LIMIT: usize = 10;
}

/// Placeholder text for absent data
pub mod display {
    pub const NO_MEDICAL_HISTORY: &str = "No medical history";
    pub const NOT_AVAILABLE: &str = "N/A";
    pub const NO_DATA: &str = "No data";
}
