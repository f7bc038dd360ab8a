//! Wires the session timer to the session store and completion effects.

use serde::{Deserialize, Serialize};

use super::engine::{SessionTimer, SAVED_MESSAGE};
use super::lifecycle::LifecycleState;
use crate::clock::{Clock, SystemClock};
use crate::effects::{dispatch_completion, CompletionEffects};
use crate::error::{Result, UnsavedSession};
use crate::events::Event;
use crate::storage::{KvStore, SessionStore};

/// Input accepted by [`FocusRunner::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerCommand {
    Configure {
        minutes: String,
        seconds: String,
        category: Option<String>,
    },
    Start,
    Pause,
    Reset,
    Lifecycle { state: LifecycleState },
}

/// Owns one timer plus the collaborators a completion is handed to.
pub struct FocusRunner<K: KvStore, E: CompletionEffects, C: Clock = SystemClock> {
    timer: SessionTimer<C>,
    store: SessionStore<K>,
    effects: E,
}

impl<K: KvStore, E: CompletionEffects, C: Clock> FocusRunner<K, E, C> {
    pub fn new(timer: SessionTimer<C>, store: SessionStore<K>, effects: E) -> Self {
        Self {
            timer,
            store,
            effects,
        }
    }

    pub fn timer(&self) -> &SessionTimer<C> {
        &self.timer
    }

    pub fn store(&self) -> &SessionStore<K> {
        &self.store
    }

    /// Apply one command to the timer.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when a start or edit is rejected; the
    /// timer is left unchanged.
    pub fn apply(&mut self, command: TimerCommand) -> Result<Option<Event>> {
        let event = match command {
            TimerCommand::Configure {
                minutes,
                seconds,
                category,
            } => {
                self.timer
                    .configure(&minutes, &seconds, category.as_deref())?;
                None
            }
            TimerCommand::Start => self.timer.start()?,
            TimerCommand::Pause => self.timer.pause(),
            TimerCommand::Reset => Some(self.timer.reset()),
            TimerCommand::Lifecycle { state } => self.timer.on_lifecycle_transition(state),
        };
        Ok(event)
    }

    /// Deliver one clock tick.
    ///
    /// On completion the session is appended to the store and the effects
    /// fire. A successful append upgrades the completion message to
    /// [`SAVED_MESSAGE`]; a failed append does not undo the completion.
    ///
    /// # Errors
    ///
    /// Returns [`UnsavedSession`] carrying the completed record when the
    /// append fails.
    pub fn tick(&mut self) -> Result<Option<Event>, UnsavedSession> {
        let Some(event) = self.timer.tick() else {
            return Ok(None);
        };
        let session = match event.completed_session() {
            Some(session) => session.clone(),
            None => return Ok(Some(event)),
        };

        let saved = self.store.append(session.clone());
        dispatch_completion(&self.effects, &session);
        match saved {
            Ok(()) => {
                self.timer.mark_saved();
                Ok(Some(Event::SessionCompleted {
                    session,
                    message: SAVED_MESSAGE.to_string(),
                }))
            }
            Err(source) => {
                tracing::error!(id = %session.id, error = %source, "failed to save session");
                Err(UnsavedSession { session, source })
            }
        }
    }
}
