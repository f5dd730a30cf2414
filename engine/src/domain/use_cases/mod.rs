pub mod fetch_readings;
pub mod fetch_roster;
pub mod get_vital_history;
pub mod login;
pub mod logout;
pub mod refresh_dashboard;
pub mod restore_session;
pub mod signup;

pub use fetch_readings::{FetchReadings, FetchReadingsUseCase};
pub use fetch_roster::{FetchRoster, FetchRosterUseCase};
pub use get_vital_history::{GetVitalHistory, GetVitalHistoryUseCase};
pub use login::{Login, LoginUseCase};
pub use logout::{Logout, LogoutUseCase};
pub use refresh_dashboard::{RefreshDashboard, RefreshDashboardUseCase};
pub use restore_session::{RestoreSession, RestoreSessionUseCase};
pub use signup::{Signup, SignupUseCase};
