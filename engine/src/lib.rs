//! Auto-Medic client engine: session lifecycle, telemetry fetching and the
//! roster/vitals merge that drives the clinical dashboard.

pub mod application;
pub mod constants;
pub mod domain;
pub mod infrastructure;
