//! Completion side effects.
//!
//! Every completed session triggers a success haptic cue and a local
//! notification. Both are best-effort: failures are logged and dropped, and
//! never affect the completed state or the store append.

use crate::error::EffectError;
use crate::session::FocusSession;

pub const NOTIFICATION_TITLE: &str = "Session complete!";

/// Platform hooks invoked once per completed session.
pub trait CompletionEffects {
    fn haptic_success(&self) -> Result<(), EffectError>;

    fn notify_completed(&self, title: &str, body: &str) -> Result<(), EffectError>;
}

/// Effects that do nothing; used when notifications are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEffects;

impl CompletionEffects for NoopEffects {
    fn haptic_success(&self) -> Result<(), EffectError> {
        Ok(())
    }

    fn notify_completed(&self, _title: &str, _body: &str) -> Result<(), EffectError> {
        Ok(())
    }
}

pub fn notification_body(session: &FocusSession) -> String {
    format!("{} focus session finished.", session.category)
}

/// Fire both effects for `session`, swallowing any failure.
pub fn dispatch_completion<E: CompletionEffects + ?Sized>(effects: &E, session: &FocusSession) {
    if let Err(e) = effects.haptic_success() {
        tracing::warn!(error = %e, "haptic feedback failed");
    }
    if let Err(e) = effects.notify_completed(NOTIFICATION_TITLE, &notification_body(session)) {
        tracing::warn!(error = %e, "completion notification failed");
    }
}
