//! Completed focus session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed countdown.
///
/// Created exactly once when a countdown reaches zero and never mutated
/// afterwards. Field names serialize in camelCase so the stored JSON array
/// stays readable by other clients of the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    /// Millisecond timestamp of `finished_at`, as a string.
    pub id: String,
    /// Resolved display label of the category.
    pub category: String,
    /// Configured duration locked at the first start, not wall-clock time.
    pub duration_seconds: u64,
    pub distraction_count: u32,
    pub finished_at: DateTime<Utc>,
}

impl FocusSession {
    pub fn new(
        category: impl Into<String>,
        duration_seconds: u64,
        distraction_count: u32,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: session_id(finished_at),
            category: category.into(),
            duration_seconds,
            distraction_count,
            finished_at,
        }
    }
}

fn session_id(finished_at: DateTime<Utc>) -> String {
    finished_at.timestamp_millis().to_string()
}

/// Format seconds as `"{m} min {s} sec"`.
pub fn format_duration(total_seconds: u64) -> String {
    format!("{} min {} sec", total_seconds / 60, total_seconds % 60)
}

/// Format seconds as a zero-padded `MM:SS` countdown clock.
///
/// Minutes are not wrapped at 60, so a 90 minute countdown reads `90:00`.
pub fn format_clock(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_is_derived_from_finish_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let session = FocusSession::new("Kodlama", 1500, 2, at);
        assert_eq!(session.id, at.timestamp_millis().to_string());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let session = FocusSession::new("Proje", 600, 0, at);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["durationSeconds"], 600);
        assert_eq!(json["distractionCount"], 0);
        assert_eq!(json["finishedAt"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn parses_javascript_iso_timestamps() {
        let json = r#"{
            "id": "1709285400123",
            "category": "Ders Çalışma",
            "durationSeconds": 1500,
            "distractionCount": 1,
            "finishedAt": "2024-03-01T09:30:00.123Z"
        }"#;
        let session: FocusSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.category, "Ders Çalışma");
        assert_eq!(session.finished_at.timestamp_millis(), 1_709_285_400_123);
    }

    #[test]
    fn formats_durations_and_clock() {
        assert_eq!(format_duration(1500), "25 min 0 sec");
        assert_eq!(format_duration(61), "1 min 1 sec");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(5400), "90:00");
    }
}
