//! Free-form timer inputs.
//!
//! Minutes and seconds are kept as the raw text the user typed so they may
//! transiently hold invalid values. They are only converted to a duration
//! when read.

use serde::{Deserialize, Serialize};

pub const MAX_SECONDS_INPUT: u64 = 59;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerInput {
    pub minutes: String,
    pub seconds: String,
    /// Selected category key.
    pub category: Option<String>,
}

impl TimerInput {
    pub fn new(
        minutes: impl Into<String>,
        seconds: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            minutes: minutes.into(),
            seconds: seconds.into(),
            category,
        }
    }

    pub fn minutes_value(&self) -> u64 {
        parse_component(&self.minutes)
    }

    /// Seconds clamped to `0..=59`.
    pub fn seconds_value(&self) -> u64 {
        parse_component(&self.seconds).min(MAX_SECONDS_INPUT)
    }

    pub fn total_seconds(&self) -> u64 {
        self.minutes_value()
            .saturating_mul(60)
            .saturating_add(self.seconds_value())
    }

    /// The selected key, treating an empty selection as unset.
    pub fn selected_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }
}

impl Default for TimerInput {
    fn default() -> Self {
        Self::new("25", "0", None)
    }
}

/// Numeric keypad semantics: non-digits are dropped, nothing left means 0.
fn parse_component(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    // Only overflow can fail here.
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_twenty_five_minutes() {
        assert_eq!(TimerInput::default().total_seconds(), 1500);
    }

    #[test]
    fn seconds_are_clamped() {
        let input = TimerInput::new("1", "75", None);
        assert_eq!(input.seconds_value(), 59);
        assert_eq!(input.total_seconds(), 119);
    }

    #[test]
    fn minutes_have_no_upper_clamp() {
        let input = TimerInput::new("600", "0", None);
        assert_eq!(input.total_seconds(), 36_000);
    }

    #[test]
    fn non_numeric_input_is_zero() {
        let input = TimerInput::new("abc", "", None);
        assert_eq!(input.total_seconds(), 0);
        let input = TimerInput::new("2x", "3 0", None);
        assert_eq!(input.total_seconds(), 150);
    }

    #[test]
    fn overflow_saturates() {
        let input = TimerInput::new("99999999999999999999999", "0", None);
        assert_eq!(input.total_seconds(), u64::MAX);
    }

    #[test]
    fn blank_category_is_unset() {
        assert_eq!(TimerInput::new("1", "0", Some("  ".into())).selected_category(), None);
        assert_eq!(
            TimerInput::new("1", "0", Some("ders".into())).selected_category(),
            Some("ders")
        );
    }
}
