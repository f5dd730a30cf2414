pub mod auth_gateway;
pub mod merge;
pub mod session_store;
pub mod telemetry_snapshot;
pub mod vital_history;

pub use auth_gateway::AuthGateway;
pub use merge::{age_on, classify, latest_reading, merge, merge_on, summarize};
pub use session_store::{Session, SessionStore};
pub use telemetry_snapshot::{InputState, ReadingsTicket, RosterTicket, TelemetrySnapshot};
pub use vital_history::history;
