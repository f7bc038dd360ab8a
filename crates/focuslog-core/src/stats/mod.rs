//! Report aggregation for focus sessions.
//!
//! Pure functions over a loaded session log: totals, a per-day lookup, a
//! fixed seven-day series and a per-category breakdown.

mod aggregate;
mod report;
mod weekly;

pub use aggregate::{
    category_distribution, focus_seconds_on, focus_seconds_on_in, total_distractions,
    total_focus_seconds,
};
pub use report::{history, Report};
pub use weekly::{last_7_days_series, last_7_days_series_in, DayBucket, SERIES_DAYS};
