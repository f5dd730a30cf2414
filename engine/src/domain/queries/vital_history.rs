//! Vital history query for a single patient

use crate::domain::{Tier, VitalReading};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitalHistoryQuery {
    pub patient_id: String,
}

impl VitalHistoryQuery {
    pub fn for_patient(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub reading: VitalReading,
    pub status: Tier,
}

/// Most recent readings first, capped for display; `total` is the uncapped count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalHistoryResponse {
    pub patient_id: String,
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
}

impl VitalHistoryResponse {
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn is_truncated(&self) -> bool {
        self.total > self.entries.len()
    }
}
