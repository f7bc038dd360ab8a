//! Session timer engine.
//!
//! A one-second-resolution countdown state machine. It does not own a
//! thread or a timer: the caller delivers `tick()` once per second while the
//! engine is running and injects foreground changes through
//! `on_lifecycle_transition()`.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!            |
//!            v
//!        Completed -> (reset) -> Idle
//! ```
//!
//! Duration and category are locked at the first `start()` of a cycle and
//! stay locked until `reset()`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = SessionTimer::new(CategoryCatalog::default(), TimerInput::default());
//! timer.configure("25", "0", Some("ders"))?;
//! timer.start()?;
//! // Once per second:
//! if let Some(event) = timer.tick() { /* SessionCompleted */ }
//! ```

use serde::{Deserialize, Serialize};

use super::input::TimerInput;
use super::lifecycle::LifecycleState;
use crate::category::CategoryCatalog;
use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::events::Event;
use crate::session::FocusSession;

pub const DISTRACTION_MESSAGE: &str = "Timer paused because you left the app.";
pub const COMPLETED_MESSAGE: &str = "Session completed.";
pub const SAVED_MESSAGE: &str = "Session completed and saved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Duration and category captured at the first start of a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedSession {
    pub duration_secs: u64,
    pub category_key: String,
    /// Display label resolved through the catalog.
    pub category: String,
}

/// Core countdown engine.
///
/// Each instance owns its own countdown, so independent timers never share
/// state.
#[derive(Debug, Clone)]
pub struct SessionTimer<C: Clock = SystemClock> {
    clock: C,
    catalog: CategoryCatalog,
    input: TimerInput,
    state: TimerState,
    locked: Option<LockedSession>,
    remaining_secs: u64,
    distraction_count: u32,
    /// True while the tick subscription is live. Only `Running` holds one.
    ticking: bool,
    last_session: Option<FocusSession>,
    info_message: Option<String>,
}

impl SessionTimer<SystemClock> {
    pub fn new(catalog: CategoryCatalog, input: TimerInput) -> Self {
        Self::with_clock(SystemClock, catalog, input)
    }
}

impl<C: Clock> SessionTimer<C> {
    pub fn with_clock(clock: C, catalog: CategoryCatalog, input: TimerInput) -> Self {
        let remaining_secs = input.total_seconds();
        Self {
            clock,
            catalog,
            input,
            state: TimerState::Idle,
            locked: None,
            remaining_secs,
            distraction_count: 0,
            ticking: false,
            last_session: None,
            info_message: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn distraction_count(&self) -> u32 {
        self.distraction_count
    }

    pub fn input(&self) -> &TimerInput {
        &self.input
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn locked(&self) -> Option<&LockedSession> {
        self.locked.as_ref()
    }

    /// Summary of the session emitted by the last completion.
    pub fn last_session(&self) -> Option<&FocusSession> {
        self.last_session.as_ref()
    }

    /// Informational notice for presentation (distraction pause, completion).
    pub fn info_message(&self) -> Option<&str> {
        self.info_message.as_deref()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Inputs are editable only while idle.
    pub fn inputs_locked(&self) -> bool {
        self.state != TimerState::Idle
    }

    pub fn snapshot(&self) -> Event {
        let (duration_secs, category) = match &self.locked {
            Some(locked) => (locked.duration_secs, Some(locked.category.clone())),
            None => (
                self.input.total_seconds(),
                self.input
                    .selected_category()
                    .map(|key| self.catalog.label_for(key).to_string()),
            ),
        };
        Event::StateSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            duration_secs,
            category,
            distraction_count: self.distraction_count,
            inputs_locked: self.inputs_locked(),
            at: self.clock.now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the duration and category inputs.
    ///
    /// Values are not validated here; `start()` does that.
    pub fn configure(
        &mut self,
        minutes: &str,
        seconds: &str,
        category: Option<&str>,
    ) -> Result<(), ValidationError> {
        if self.inputs_locked() {
            return Err(ValidationError::InputsLocked);
        }
        self.input = TimerInput::new(minutes, seconds, category.map(str::to_string));
        self.remaining_secs = self.input.total_seconds();
        Ok(())
    }

    pub fn start(&mut self) -> Result<Option<Event>, ValidationError> {
        match self.state {
            TimerState::Running => Ok(None),
            TimerState::Paused => {
                self.state = TimerState::Running;
                self.ticking = true;
                self.info_message = None;
                tracing::debug!(remaining_secs = self.remaining_secs, "timer resumed");
                Ok(Some(Event::TimerResumed {
                    remaining_secs: self.remaining_secs,
                    at: self.clock.now(),
                }))
            }
            TimerState::Idle | TimerState::Completed => {
                // Validate before touching anything so a failure leaves
                // the engine exactly as it was.
                let locked = self.lock_inputs()?;
                if self.state == TimerState::Completed {
                    self.reset();
                }
                self.remaining_secs = locked.duration_secs;
                self.state = TimerState::Running;
                self.ticking = true;
                self.info_message = None;
                tracing::debug!(
                    duration_secs = locked.duration_secs,
                    category = %locked.category,
                    "timer started"
                );
                let event = Event::TimerStarted {
                    duration_secs: locked.duration_secs,
                    category: locked.category.clone(),
                    at: self.clock.now(),
                };
                self.locked = Some(locked);
                Ok(Some(event))
            }
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.halt();
        tracing::debug!(remaining_secs = self.remaining_secs, "timer paused");
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: self.clock.now(),
        })
    }

    /// Return to `Idle` from any state.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.ticking = false;
        self.locked = None;
        self.distraction_count = 0;
        self.last_session = None;
        self.info_message = None;
        self.remaining_secs = self.input.total_seconds();
        tracing::debug!(remaining_secs = self.remaining_secs, "timer reset");
        Event::TimerReset {
            remaining_secs: self.remaining_secs,
            at: self.clock.now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::SessionCompleted)` exactly once per countdown,
    /// on the tick that reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running || !self.ticking {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        // Cancel future ticks before emitting.
        self.ticking = false;
        self.state = TimerState::Completed;
        let locked = self.locked.as_ref()?;
        let session = FocusSession::new(
            locked.category.clone(),
            locked.duration_secs,
            self.distraction_count,
            self.clock.now(),
        );
        tracing::info!(
            id = %session.id,
            category = %session.category,
            duration_secs = session.duration_seconds,
            distractions = session.distraction_count,
            "focus session completed"
        );
        self.last_session = Some(session.clone());
        self.info_message = Some(COMPLETED_MESSAGE.to_string());
        Some(Event::SessionCompleted {
            session,
            message: COMPLETED_MESSAGE.to_string(),
        })
    }

    /// Feed a foreground change from the platform.
    ///
    /// Leaving the foreground while running pauses the countdown and counts
    /// one distraction. In every other state it is ignored.
    pub fn on_lifecycle_transition(&mut self, next: LifecycleState) -> Option<Event> {
        if next.is_active() || self.state != TimerState::Running {
            return None;
        }
        self.halt();
        self.distraction_count += 1;
        self.info_message = Some(DISTRACTION_MESSAGE.to_string());
        tracing::debug!(
            distractions = self.distraction_count,
            remaining_secs = self.remaining_secs,
            lifecycle = ?next,
            "timer paused by lifecycle transition"
        );
        Some(Event::Distracted {
            distraction_count: self.distraction_count,
            remaining_secs: self.remaining_secs,
            message: DISTRACTION_MESSAGE.to_string(),
            at: self.clock.now(),
        })
    }

    /// Record that the last completed session reached the store.
    pub(crate) fn mark_saved(&mut self) {
        if self.state == TimerState::Completed {
            self.info_message = Some(SAVED_MESSAGE.to_string());
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn halt(&mut self) {
        self.state = TimerState::Paused;
        self.ticking = false;
    }

    fn lock_inputs(&self) -> Result<LockedSession, ValidationError> {
        let duration_secs = self.input.total_seconds();
        if duration_secs == 0 {
            return Err(ValidationError::NonPositiveDuration);
        }
        let key = self
            .input
            .selected_category()
            .ok_or(ValidationError::MissingCategory)?;
        Ok(LockedSession {
            duration_secs,
            category_key: key.to_string(),
            category: self.catalog.label_for(key).to_string(),
        })
    }
}
