use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::FocusSession;
use crate::timer::TimerState;

/// Every state change of the session timer produces an Event.
/// Presentation code decides how to surface them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        duration_secs: u64,
        category: String,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown paused because the app left the foreground.
    Distracted {
        distraction_count: u32,
        remaining_secs: u64,
        message: String,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        session: FocusSession,
        message: String,
    },
    TimerReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        remaining_secs: u64,
        /// Locked duration, or the current input total while idle.
        duration_secs: u64,
        category: Option<String>,
        distraction_count: u32,
        inputs_locked: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The session carried by a completion event.
    pub fn completed_session(&self) -> Option<&FocusSession> {
        match self {
            Event::SessionCompleted { session, .. } => Some(session),
            _ => None,
        }
    }
}
