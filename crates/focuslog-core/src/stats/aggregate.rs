//! Totals and groupings over a session log snapshot.
//!
//! Every function here is pure and total: an empty slice yields zero or
//! an empty map, and sums saturate at `u64::MAX` instead of overflowing.

use chrono::{Local, NaiveDate, TimeZone};
use indexmap::IndexMap;

use crate::session::FocusSession;

pub fn total_focus_seconds(sessions: &[FocusSession]) -> u64 {
    sessions
        .iter()
        .map(|s| s.duration_seconds)
        .fold(0, u64::saturating_add)
}

pub fn total_distractions(sessions: &[FocusSession]) -> u64 {
    sessions
        .iter()
        .map(|s| u64::from(s.distraction_count))
        .fold(0, u64::saturating_add)
}

/// Focus seconds of sessions that finished on `day` in local time.
pub fn focus_seconds_on(sessions: &[FocusSession], day: NaiveDate) -> u64 {
    focus_seconds_on_in(sessions, day, &Local)
}

/// Same as [`focus_seconds_on`] with the day boundary taken in `tz`.
///
/// Two instants share a day iff their year/month/day in `tz` match.
pub fn focus_seconds_on_in<Tz: TimeZone>(sessions: &[FocusSession], day: NaiveDate, tz: &Tz) -> u64 {
    sessions
        .iter()
        .filter(|s| s.finished_at.with_timezone(tz).date_naive() == day)
        .map(|s| s.duration_seconds)
        .fold(0, u64::saturating_add)
}

/// Minutes per category label, in order of first appearance.
///
/// Labels are compared as exact strings; no case folding or trimming.
pub fn category_distribution(sessions: &[FocusSession]) -> IndexMap<String, f64> {
    let mut seconds: IndexMap<&str, u64> = IndexMap::new();
    for session in sessions {
        let total = seconds.entry(session.category.as_str()).or_insert(0);
        *total = total.saturating_add(session.duration_seconds);
    }
    seconds
        .into_iter()
        .map(|(category, secs)| (category.to_string(), secs as f64 / 60.0))
        .collect()
}
