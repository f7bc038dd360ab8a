mod driver;
mod engine;
mod input;
mod lifecycle;
mod runner;

pub use driver::{run_session, DriverCommand, DriverOutput};
pub use engine::{LockedSession, SessionTimer, TimerState, COMPLETED_MESSAGE, DISTRACTION_MESSAGE, SAVED_MESSAGE};
pub use input::{TimerInput, MAX_SECONDS_INPUT};
pub use lifecycle::LifecycleState;
pub use runner::{FocusRunner, TimerCommand};
