//! Fixed seven-day focus time series.

use chrono::{Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::aggregate::focus_seconds_on_in;
use crate::session::FocusSession;

pub const SERIES_DAYS: u64 = 7;

/// Focus minutes for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Short weekday name, e.g. `Mon`.
    pub label: String,
    /// Not truncated: 90 seconds is 1.5 minutes.
    pub minutes: f64,
}

/// Seven buckets, oldest first, ending at `today` (local time).
pub fn last_7_days_series(sessions: &[FocusSession], today: NaiveDate) -> Vec<DayBucket> {
    last_7_days_series_in(sessions, today, &Local)
}

/// Same as [`last_7_days_series`] with day boundaries taken in `tz`.
///
/// Days without sessions are kept with zero minutes.
pub fn last_7_days_series_in<Tz: TimeZone>(
    sessions: &[FocusSession],
    today: NaiveDate,
    tz: &Tz,
) -> Vec<DayBucket> {
    (0..SERIES_DAYS)
        .rev()
        .map(|days_back| {
            let date = today - Days::new(days_back);
            DayBucket {
                date,
                label: date.format("%a").to_string(),
                minutes: focus_seconds_on_in(sessions, date, tz) as f64 / 60.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn finished(d: u32, secs: u64) -> FocusSession {
        let at = Utc.from_utc_datetime(&day(d).and_hms_opt(9, 0, 0).unwrap());
        FocusSession::new("Kodlama", secs, 0, at)
    }

    #[test]
    fn empty_log_gives_seven_zero_days() {
        let series = last_7_days_series_in(&[], day(12), &Utc);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|b| b.minutes == 0.0));
        assert_eq!(series[0].date, day(6));
        assert_eq!(series[6].date, day(12));
    }

    #[test]
    fn buckets_are_oldest_first_with_weekday_labels() {
        // 2024-05-12 was a Sunday.
        let series = last_7_days_series_in(&[], day(12), &Utc);
        let labels: Vec<&str> = series.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn sums_per_day_and_ignores_older_sessions() {
        let sessions = vec![
            finished(1, 3600), // outside the window
            finished(6, 90),
            finished(10, 600),
            finished(10, 300),
            finished(12, 1500),
        ];
        let series = last_7_days_series_in(&sessions, day(12), &Utc);
        let minutes: Vec<f64> = series.iter().map(|b| b.minutes).collect();
        assert_eq!(minutes, [1.5, 0.0, 0.0, 0.0, 15.0, 0.0, 25.0]);
    }

    #[test]
    fn crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let series = last_7_days_series_in(&[], today, &Utc);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
    }
}
