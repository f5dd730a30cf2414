pub mod mock_api;
pub mod monitoring_api;
pub mod session_storage;

pub use mock_api::{ApiCall, MockMonitoringApi};
pub use monitoring_api::MonitoringApi;
pub use session_storage::SessionStorage;
