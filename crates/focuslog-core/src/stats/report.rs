use chrono::{Local, NaiveDate, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::aggregate::{
    category_distribution, focus_seconds_on_in, total_distractions, total_focus_seconds,
};
use super::weekly::{last_7_days_series_in, DayBucket};
use crate::session::FocusSession;

/// Everything the reports screen shows, computed from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub today: NaiveDate,
    pub session_count: usize,
    pub today_focus_seconds: u64,
    pub total_focus_seconds: u64,
    pub total_distractions: u64,
    pub last_7_days: Vec<DayBucket>,
    pub categories: IndexMap<String, f64>,
}

impl Report {
    pub fn build(sessions: &[FocusSession], today: NaiveDate) -> Self {
        Self::build_in(sessions, today, &Local)
    }

    pub fn build_in<Tz: TimeZone>(sessions: &[FocusSession], today: NaiveDate, tz: &Tz) -> Self {
        Self {
            today,
            session_count: sessions.len(),
            today_focus_seconds: focus_seconds_on_in(sessions, today, tz),
            total_focus_seconds: total_focus_seconds(sessions),
            total_distractions: total_distractions(sessions),
            last_7_days: last_7_days_series_in(sessions, today, tz),
            categories: category_distribution(sessions),
        }
    }
}

/// Sessions newest first, optionally capped at `limit`.
pub fn history(sessions: &[FocusSession], limit: Option<usize>) -> Vec<&FocusSession> {
    sessions
        .iter()
        .rev()
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
