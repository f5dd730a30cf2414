//! VitalReading entity
//! One oximeter sample for a patient, immutable once fetched

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Owning patient; accepted as a bare id or a populated `{ "_id": ... }` object
    #[serde(deserialize_with = "deserialize_patient_ref")]
    pub patient_id: String,

    pub heart_rate: i32,

    pub oxygen_percentage: i32,

    pub timestamp: DateTime<Utc>,
}

fn deserialize_patient_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PatientRef {
        Id(String),
        Populated {
            #[serde(rename = "_id", alias = "id")]
            id: String,
        },
    }

    Ok(match PatientRef::deserialize(deserializer)? {
        PatientRef::Id(id) => id,
        PatientRef::Populated { id } => id,
    })
}
