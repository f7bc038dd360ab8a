//! Integration tests for the session store and report aggregation.
//!
//! Sessions are written through an on-disk store, reloaded, and fed to the
//! aggregator.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use focuslog_core::stats::{
    category_distribution, focus_seconds_on_in, last_7_days_series_in, total_distractions,
    total_focus_seconds,
};
use focuslog_core::storage::{Database, SessionStore};
use focuslog_core::{FocusSession, Report};

fn noon(date: NaiveDate) -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
}

#[test]
fn test_store_roundtrip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focuslog.db");
    let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();

    {
        let store = SessionStore::new(Database::open_at(&path).unwrap());
        for (secs, minutes_ago) in [(600, 90), (300, 60), (900, 0)] {
            let at = noon(today) - Duration::minutes(minutes_ago);
            store.append(FocusSession::new("Ders Çalışma", secs, 0, at)).unwrap();
        }
    }

    let store = SessionStore::new(Database::open_at(&path).unwrap());
    let sessions = store.load().unwrap();
    assert_eq!(sessions.len(), 3);
    assert_eq!(total_focus_seconds(&sessions), 1800);
    assert_eq!(focus_seconds_on_in(&sessions, today, &Utc), 1800);
}

#[test]
fn test_empty_store_report() {
    let store = SessionStore::new(Database::open_memory().unwrap());
    let sessions = store.load().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
    let report = Report::build_in(&sessions, today, &Utc);

    assert_eq!(report.total_focus_seconds, 0);
    assert_eq!(report.total_distractions, 0);
    assert_eq!(report.last_7_days.len(), 7);
    assert!(report.last_7_days.iter().all(|d| d.minutes == 0.0));
    assert!(report.categories.is_empty());
}

#[test]
fn test_report_serializes_for_display() {
    let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
    let sessions = vec![
        FocusSession::new("Kodlama", 1500, 2, noon(today)),
        FocusSession::new("Proje", 600, 0, noon(today) - Duration::days(2)),
    ];
    let report = Report::build_in(&sessions, today, &Utc);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["today_focus_seconds"], 1500);
    assert_eq!(json["total_distractions"], 2);
    assert_eq!(json["last_7_days"][6]["minutes"], 25.0);
    assert_eq!(json["last_7_days"][4]["minutes"], 10.0);
    assert_eq!(json["categories"]["Kodlama"], 25.0);
}

fn category() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Ders Çalışma", "Kodlama", "Proje", "Kitap Okuma", "kodlama"])
        .prop_map(str::to_string)
}

fn sessions(today: NaiveDate) -> impl Strategy<Value = Vec<FocusSession>> {
    prop::collection::vec((category(), 1u64..7200, 0u32..5, 0i64..14, 0i64..86_400), 0..40)
        .prop_map(move |rows| {
            rows.into_iter()
                .map(|(category, secs, distractions, days_back, second_of_day)| {
                    let midnight = Utc.from_utc_datetime(&today.and_hms_opt(0, 0, 0).unwrap());
                    let at = midnight - Duration::days(days_back) + Duration::seconds(second_of_day);
                    FocusSession::new(category, secs, distractions, at)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn prop_series_has_seven_days_summing_to_window_total(
        sessions in sessions(NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()),
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let series = last_7_days_series_in(&sessions, today, &Utc);
        prop_assert_eq!(series.len(), 7);
        prop_assert_eq!(series[6].date, today);

        let window_start = today - chrono::Days::new(6);
        let window_secs: u64 = sessions
            .iter()
            .filter(|s| s.finished_at.date_naive() >= window_start)
            .map(|s| s.duration_seconds)
            .sum();
        let series_minutes: f64 = series.iter().map(|d| d.minutes).sum();
        prop_assert!((series_minutes - window_secs as f64 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn prop_distribution_sums_to_total(
        sessions in sessions(NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()),
    ) {
        let dist = category_distribution(&sessions);
        let minutes: f64 = dist.values().sum();
        prop_assert!((minutes - total_focus_seconds(&sessions) as f64 / 60.0).abs() < 1e-6);
        prop_assert!(dist.len() <= 5);
    }

    #[test]
    fn prop_store_append_preserves_history(
        sessions in sessions(NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()),
    ) {
        let store = SessionStore::new(Database::open_memory().unwrap());
        for session in &sessions {
            let before = store.load().unwrap();
            store.append(session.clone()).unwrap();
            let after = store.load().unwrap();
            prop_assert_eq!(&after[..before.len()], before.as_slice());
            prop_assert_eq!(after.last(), Some(session));
        }
        prop_assert_eq!(
            total_distractions(&store.load().unwrap()),
            total_distractions(&sessions)
        );
    }
}
