//! PatientRecord entity
//! Roster entry owned by the remote system, fetched read-only

use crate::domain::{Address, EmergencyContact, PatientInfo};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// ISO-8601 date or date-time as sent by the server
    #[serde(default)]
    pub date_of_birth: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone_number: String,

    #[serde(default)]
    pub address: Address,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub patient_info: PatientInfo,
}

impl PatientRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Birth date parsed from either `YYYY-MM-DD` or a full RFC 3339 timestamp
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let raw = self.date_of_birth.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    }

    pub fn condition(&self) -> String {
        self.patient_info.condition()
    }

    pub fn emergency_contact(&self) -> Option<&EmergencyContact> {
        self.patient_info
            .emergency_contact
            .as_ref()
            .filter(|c| c.is_provided())
    }
}
