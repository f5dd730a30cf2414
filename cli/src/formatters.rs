//! Output formatting utilities

use automedic_engine::constants::display::NOT_AVAILABLE;
use automedic_engine::domain::{Tier, VitalHistoryResponse};
use chrono::{DateTime, Local, Utc};
use colored::*;
use std::io::{self, Write};
use tabwriter::TabWriter;

/// Format a UTC instant as local date/time
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Format tier with appropriate color
pub fn format_tier(tier: Tier) -> ColoredString {
    let label = tier.to_string();
    match tier {
        Tier::Critical => label.red().bold(),
        Tier::Warning => label.yellow(),
        Tier::Normal => label.green(),
        Tier::Unknown => label.dimmed(),
    }
}

pub fn format_age(age: u32) -> String {
    age.to_string()
}

pub fn format_heart_rate(heart_rate: Option<i32>) -> String {
    heart_rate
        .map(|hr| format!("{} BPM", hr))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_oxygen(oxygen: Option<i32>) -> String {
    oxygen
        .map(|o2| format!("{}%", o2))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Tab-aligned history table followed by the "showing N of M" footer.
/// The status column is last so its color codes never disturb alignment.
pub fn write_history_table<W: Write>(out: W, history: &VitalHistoryResponse) -> io::Result<()> {
    let mut tw = TabWriter::new(out).padding(2);
    writeln!(tw, "  TIME\tHEART RATE\tSPO2\tSTATUS")?;
    for entry in &history.entries {
        writeln!(
            tw,
            "  {}\t{}\t{}\t{}",
            format_timestamp(entry.reading.timestamp),
            format_heart_rate(Some(entry.reading.heart_rate)),
            format_oxygen(Some(entry.reading.oxygen_percentage)),
            format_tier(entry.status)
        )?;
    }
    writeln!(
        tw,
        "\n  Showing latest {} readings out of {} total",
        history.entries.len(),
        history.total
    )?;
    tw.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use automedic_engine::domain::{HistoryEntry, VitalReading};
    use chrono::TimeZone;

    #[test]
    fn test_missing_vitals_show_placeholder() {
        assert_eq!(format_heart_rate(None), "N/A");
        assert_eq!(format_oxygen(None), "N/A");
        assert_eq!(format_heart_rate(Some(72)), "72 BPM");
        assert_eq!(format_oxygen(Some(98)), "98%");
    }

    #[test]
    fn test_history_footer() {
        colored::control::set_override(false);

        let reading = VitalReading {
            id: "r1".to_string(),
            patient_id: "p1".to_string(),
            heart_rate: 72,
            oxygen_percentage: 99,
            timestamp: Utc.with_ymd_and_hms(2025, 6, 14, 8, 0, 0).unwrap(),
        };
        let history = VitalHistoryResponse {
            patient_id: "p1".to_string(),
            entries: vec![HistoryEntry {
                reading,
                status: Tier::Normal,
            }],
            total: 14,
        };

        let mut buf = Vec::new();
        write_history_table(&mut buf, &history).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("72 BPM"));
        assert!(text.contains("normal"));
        assert!(text.contains("Showing latest 1 readings out of 14 total"));
    }
}
