//! Vital history for the drill-down view of one patient

use crate::domain::services::classify;
use crate::domain::{HistoryEntry, VitalHistoryResponse, VitalReading};

/// Readings of `patient_id`, newest first, at most `limit` of them.
///
/// Equal timestamps keep their input order, matching the tie rule used for the
/// latest reading. `total` counts every reading of the patient.
pub fn history(
    patient_id: &str,
    readings: &[VitalReading],
    limit: usize,
) -> VitalHistoryResponse {
    let mut own: Vec<&VitalReading> = readings
        .iter()
        .filter(|r| r.patient_id == patient_id)
        .collect();
    own.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let total = own.len();
    let entries = own
        .into_iter()
        .take(limit)
        .map(|reading| HistoryEntry {
            status: classify(Some(reading)),
            reading: reading.clone(),
        })
        .collect();

    VitalHistoryResponse {
        patient_id: patient_id.to_string(),
        entries,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::vitals::HISTORY_DISPLAY_LIMIT;
    use crate::domain::services::latest_reading;
    use crate::domain::Tier;
    use chrono::{Duration, TimeZone, Utc};

    fn readings_for(patient_id: &str, count: usize) -> Vec<VitalReading> {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| VitalReading {
                id: format!("{}-{}", patient_id, i),
                patient_id: patient_id.to_string(),
                heart_rate: 60 + i as i32 * 5,
                oxygen_percentage: 99,
                timestamp: base + Duration::minutes(i as i64),
            })
            .collect()
    }

    #[test]
    fn test_newest_first_and_capped() {
        let mut readings = readings_for("p1", 14);
        readings.extend(readings_for("p2", 3));

        let response = history("p1", &readings, HISTORY_DISPLAY_LIMIT);

        assert_eq!(response.total, 14);
        assert_eq!(response.entries.len(), 10);
        assert!(response.is_truncated());
        assert_eq!(response.latest().unwrap().reading.id, "p1-13");
        assert!(response
            .entries
            .windows(2)
            .all(|w| w[0].reading.timestamp >= w[1].reading.timestamp));
    }

    #[test]
    fn test_each_entry_classified() {
        let readings = readings_for("p1", 3);
        let response = history("p1", &readings, HISTORY_DISPLAY_LIMIT);

        // heart rates 70, 65, 60 newest first
        let statuses: Vec<Tier> = response.entries.iter().map(|e| e.status).collect();
        assert_eq!(statuses, vec![Tier::Normal, Tier::Normal, Tier::Normal]);
        assert!(!response.is_truncated());
    }

    #[test]
    fn test_unknown_patient_is_empty() {
        let response = history("nobody", &readings_for("p1", 3), HISTORY_DISPLAY_LIMIT);
        assert_eq!(response.total, 0);
        assert!(response.latest().is_none());
    }

    #[test]
    fn test_head_agrees_with_latest_reading_on_ties() {
        let mut readings = readings_for("p1", 2);
        readings[1].timestamp = readings[0].timestamp;

        let response = history("p1", &readings, HISTORY_DISPLAY_LIMIT);
        assert_eq!(
            response.latest().unwrap().reading.id,
            latest_reading("p1", &readings).unwrap().id
        );
    }
}
