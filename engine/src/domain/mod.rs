pub mod commands;
pub mod entities;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod use_cases;
pub mod value_objects;

pub use commands::{DoctorInfo, LoginCommand, SignupCommand, SignupField, SignupPayload};
pub use entities::{Identity, PatientRecord, VitalReading};
pub use error::{DomainError, Result};
pub use queries::{
    DashboardResponse, DashboardSummary, HistoryEntry, PatientView, VitalHistoryQuery,
    VitalHistoryResponse,
};
pub use value_objects::{
    Address, AuthResponse, AuthToken, EmergencyContact, FetchOutcome, PatientInfo, Role, Tier,
};
