pub mod identity;
pub mod patient;
pub mod vital_reading;

pub use identity::Identity;
pub use patient::PatientRecord;
pub use vital_reading::VitalReading;
