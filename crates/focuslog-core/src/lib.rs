//! # Focuslog Core Library
//!
//! Core logic for a personal focus-session timer: a countdown that tracks
//! distractions, an append-only log of completed sessions, and the reports
//! computed from that log.
//!
//! ## Architecture
//!
//! - **Timer**: a one-second countdown state machine driven by explicit
//!   `tick()` calls and injected foreground changes
//! - **Storage**: SQLite-backed key-value store holding the session log as
//!   one JSON record, plus TOML configuration
//! - **Stats**: pure aggregation over a loaded session log
//!
//! ## Key Components
//!
//! - [`SessionTimer`]: countdown state machine
//! - [`FocusRunner`]: hands completed sessions to the store and side effects
//! - [`SessionStore`]: append-only session log
//! - [`Report`]: totals, seven-day series and category breakdown

pub mod category;
pub mod clock;
pub mod effects;
pub mod error;
pub mod events;
pub mod session;
pub mod stats;
pub mod storage;
pub mod timer;

pub use category::{Category, CategoryCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use effects::{CompletionEffects, NoopEffects};
pub use error::{ConfigError, CoreError, EffectError, StorageError, UnsavedSession, ValidationError};
pub use events::Event;
pub use session::{format_clock, format_duration, FocusSession};
pub use stats::{DayBucket, Report};
pub use storage::{Config, Database, KvStore, SessionStore};
pub use timer::{FocusRunner, LifecycleState, SessionTimer, TimerCommand, TimerInput, TimerState};
