//! Merge & Classification Engine
//!
//! Joins the patient roster with oximeter telemetry into one [`PatientView`]
//! per roster entry. Pure: the same roster and readings always yield the same
//! views, in roster order.

use crate::domain::{DashboardSummary, PatientRecord, PatientView, Tier, VitalReading};
use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashMap;
use tracing::warn;

/// `None` classifies as Unknown; otherwise thresholds apply to the integer vitals
pub fn classify(reading: Option<&VitalReading>) -> Tier {
    match reading {
        None => Tier::Unknown,
        Some(r) => Tier::from_vitals(r.heart_rate, r.oxygen_percentage),
    }
}

/// Latest reading for one patient.
///
/// On equal timestamps the reading that appears first in `readings` wins.
pub fn latest_reading<'a>(
    patient_id: &str,
    readings: &'a [VitalReading],
) -> Option<&'a VitalReading> {
    readings
        .iter()
        .filter(|r| r.patient_id == patient_id)
        .fold(None, |best: Option<&VitalReading>, r| match best {
            Some(b) if r.timestamp <= b.timestamp => Some(b),
            _ => Some(r),
        })
}

/// Latest reading per patient in one pass, same tie rule as [`latest_reading`]
fn latest_by_patient(readings: &[VitalReading]) -> HashMap<&str, &VitalReading> {
    let mut latest: HashMap<&str, &VitalReading> = HashMap::new();
    for reading in readings {
        latest
            .entry(reading.patient_id.as_str())
            .and_modify(|best| {
                if reading.timestamp > best.timestamp {
                    *best = reading;
                }
            })
            .or_insert(reading);
    }
    latest
}

/// Completed years between `date_of_birth` and `today`.
/// A birth date in the future yields 0.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Merge against the local calendar date
pub fn merge(roster: &[PatientRecord], readings: &[VitalReading]) -> Vec<PatientView> {
    merge_on(roster, readings, Local::now().date_naive())
}

/// Merge with an explicit "today" for the age computation
pub fn merge_on(
    roster: &[PatientRecord],
    readings: &[VitalReading],
    today: NaiveDate,
) -> Vec<PatientView> {
    let latest = latest_by_patient(readings);

    roster
        .iter()
        .map(|patient| {
            let latest_reading = latest.get(patient.id.as_str()).map(|r| (*r).clone());
            let status = classify(latest_reading.as_ref());

            let age = match patient.birth_date() {
                Some(dob) => age_on(dob, today),
                None => {
                    warn!(
                        patient_id = %patient.id,
                        date_of_birth = %patient.date_of_birth,
                        "Unparseable date of birth, reporting age 0"
                    );
                    0
                }
            };

            PatientView {
                patient_id: patient.id.clone(),
                display_name: patient.display_name(),
                age,
                latest_reading,
                status,
                email: patient.email.clone(),
                phone_number: patient.phone_number.clone(),
                address: patient.address.clone(),
                condition: patient.condition(),
                emergency_contact: patient.emergency_contact().cloned(),
                active: patient.active,
                created_at: patient.created_at,
            }
        })
        .collect()
}

/// Dashboard header counters
pub fn summarize(views: &[PatientView]) -> DashboardSummary {
    DashboardSummary {
        total: views.len(),
        active: views.iter().filter(|v| v.active).count(),
        critical: views.iter().filter(|v| v.status.is_critical()).count(),
    }
}
