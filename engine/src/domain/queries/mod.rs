pub mod dashboard;
pub mod vital_history;

pub use dashboard::{DashboardResponse, DashboardSummary, PatientView};
pub use vital_history::{HistoryEntry, VitalHistoryQuery, VitalHistoryResponse};
