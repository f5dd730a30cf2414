//! Patient-specific profile section (`patientInfo` on the wire)

use super::EmergencyContact;
use crate::constants::display::NO_MEDICAL_HISTORY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientInfo {
    pub medical_history: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
}

impl PatientInfo {
    /// Medical history for display, with a placeholder when none was recorded
    pub fn condition(&self) -> String {
        match self.medical_history.as_deref().map(str::trim) {
            Some(history) if !history.is_empty() => history.to_string(),
            _ => NO_MEDICAL_HISTORY.to_string(),
        }
    }
}
