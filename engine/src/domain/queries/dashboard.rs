//! Dashboard read models
//! Derived per-patient views, never persisted

use crate::domain::{Address, EmergencyContact, Tier, VitalReading};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One roster entry joined with its latest vital reading
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientView {
    pub patient_id: String,
    pub display_name: String,
    pub age: u32,
    pub latest_reading: Option<VitalReading>,
    pub status: Tier,

    // Drill-down details carried from the roster entry
    pub email: String,
    pub phone_number: String,
    pub address: Address,
    pub condition: String,
    pub emergency_contact: Option<EmergencyContact>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl PatientView {
    pub fn heart_rate(&self) -> Option<i32> {
        self.latest_reading.as_ref().map(|r| r.heart_rate)
    }

    pub fn oxygen_percentage(&self) -> Option<i32> {
        self.latest_reading.as_ref().map(|r| r.oxygen_percentage)
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.latest_reading.as_ref().map(|r| r.timestamp)
    }
}

/// Header counters of the doctor dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub active: usize,
    pub critical: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub patients: Vec<PatientView>,
    pub summary: DashboardSummary,
    /// False when the latest roster fetch failed and no earlier roster is held
    pub roster_available: bool,
    /// False when the latest readings fetch failed and no earlier readings are held
    pub readings_available: bool,
}
