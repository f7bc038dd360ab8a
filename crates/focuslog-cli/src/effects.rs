//! Terminal stand-ins for haptic and notification feedback.

use std::io::Write;

use focuslog_core::storage::NotificationsConfig;
use focuslog_core::{CompletionEffects, EffectError};

pub struct TerminalEffects {
    haptics: bool,
    notifications: bool,
}

impl TerminalEffects {
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            haptics: config.enabled && config.haptics,
            notifications: config.enabled,
        }
    }
}

impl CompletionEffects for TerminalEffects {
    /// Rings the terminal bell.
    fn haptic_success(&self) -> Result<(), EffectError> {
        if !self.haptics {
            return Ok(());
        }
        let mut err = std::io::stderr();
        err.write_all(b"\x07")
            .and_then(|_| err.flush())
            .map_err(|e| EffectError {
                effect: "bell",
                message: e.to_string(),
            })
    }

    fn notify_completed(&self, title: &str, body: &str) -> Result<(), EffectError> {
        if !self.notifications {
            return Ok(());
        }
        writeln!(std::io::stderr(), "[{title}] {body}").map_err(|e| EffectError {
            effect: "notification",
            message: e.to_string(),
        })
    }
}
