//! Async driver for a [`FocusRunner`].
//!
//! Commands and ticks are handled on one task, so timer state is never
//! mutated concurrently. The one-second interval only exists while the
//! timer is running: it is created on entering `Running` and dropped on
//! every exit, including the completion tick itself.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use super::runner::{FocusRunner, TimerCommand};
use crate::clock::Clock;
use crate::effects::CompletionEffects;
use crate::error::{CoreError, UnsavedSession};
use crate::events::Event;
use crate::storage::KvStore;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    Timer(TimerCommand),
    Shutdown,
}

#[derive(Debug)]
pub enum DriverOutput {
    Event(Event),
    /// A tick that did not finish the countdown.
    Tick { remaining_secs: u64 },
    Rejected(CoreError),
    Unsaved(UnsavedSession),
}

/// Run `runner` until a `Shutdown` command arrives or the command channel
/// closes, then hand the runner back.
///
/// Commands are polled before ticks, so a pause that is already queued
/// always lands before the next decrement.
pub async fn run_session<K, E, C>(
    mut runner: FocusRunner<K, E, C>,
    mut commands: mpsc::Receiver<DriverCommand>,
    outputs: mpsc::Sender<DriverOutput>,
) -> FocusRunner<K, E, C>
where
    K: KvStore,
    E: CompletionEffects,
    C: Clock,
{
    let mut ticker: Option<Interval> = None;

    loop {
        sync_ticker(runner.timer().is_ticking(), &mut ticker);

        let output = tokio::select! {
            biased;
            command = commands.recv() => match command {
                None | Some(DriverCommand::Shutdown) => break,
                Some(DriverCommand::Timer(command)) => match runner.apply(command) {
                    Ok(Some(event)) => Some(DriverOutput::Event(event)),
                    Ok(None) => None,
                    Err(e) => Some(DriverOutput::Rejected(e)),
                },
            },
            _ = next_tick(&mut ticker) => match runner.tick() {
                Ok(Some(event)) => Some(DriverOutput::Event(event)),
                Ok(None) => Some(DriverOutput::Tick {
                    remaining_secs: runner.timer().remaining_secs(),
                }),
                Err(unsaved) => Some(DriverOutput::Unsaved(unsaved)),
            },
        };

        if let Some(output) = output {
            if outputs.send(output).await.is_err() {
                tracing::debug!("driver output receiver dropped");
            }
        }
    }

    tracing::debug!("session driver stopped");
    runner
}

fn sync_ticker(ticking: bool, ticker: &mut Option<Interval>) {
    match (ticking, ticker.is_some()) {
        (true, false) => {
            let mut interval = time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            *ticker = Some(interval);
        }
        (false, true) => *ticker = None,
        _ => {}
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
