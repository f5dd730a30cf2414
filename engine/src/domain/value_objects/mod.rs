pub mod auth_token;
pub mod contact;
pub mod fetch_outcome;
pub mod patient_info;
pub mod role;
pub mod tier;

pub use auth_token::{AuthResponse, AuthToken};
pub use contact::{Address, EmergencyContact};
pub use fetch_outcome::FetchOutcome;
pub use patient_info::PatientInfo;
pub use role::Role;
pub use tier::Tier;
