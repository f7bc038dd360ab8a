use std::io::Write;

use clap::Subcommand;
use focuslog_core::storage::{Database, SessionStore};
use focuslog_core::timer::{run_session, DriverCommand, DriverOutput};
use focuslog_core::{
    format_clock, format_duration, Config, Event, FocusRunner, LifecycleState, SessionTimer,
    TimerCommand,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::effects::TerminalEffects;

const HELP: &str = "commands: s=start/resume  p=pause  r=reset  b=leave app  f=back to app  \
c <min> <sec> <category>=configure  q=quit";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run an interactive countdown, reading commands from stdin
    Run {
        /// Minutes (defaults to timer.minutes from config)
        #[arg(long)]
        minutes: Option<String>,
        /// Seconds, clamped to 0-59 (defaults to timer.seconds from config)
        #[arg(long)]
        seconds: Option<String>,
        /// Category key (defaults to timer.category from config)
        #[arg(long)]
        category: Option<String>,
        /// Start immediately instead of waiting for `s`
        #[arg(long)]
        start: bool,
        /// Exit after the first completed session
        #[arg(long)]
        once: bool,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run {
            minutes,
            seconds,
            category,
            start,
            once,
        } => {
            let config = Config::load()?;
            let mut input = config.timer_input();
            if let Some(minutes) = minutes {
                input.minutes = minutes;
            }
            if let Some(seconds) = seconds {
                input.seconds = seconds;
            }
            if category.is_some() {
                input.category = category;
            }

            let runner = FocusRunner::new(
                SessionTimer::new(config.catalog(), input),
                SessionStore::new(Database::open()?),
                TerminalEffects::from_config(&config.notifications),
            );

            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let result = rt.block_on(interactive(runner, start, once));
            // The stdin reader may still be parked on a blocking read.
            rt.shutdown_background();
            result
        }
    }
}

async fn interactive(
    runner: FocusRunner<Database, TerminalEffects>,
    start: bool,
    once: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (out_tx, mut out_rx) = mpsc::channel(16);

    print_snapshot(&runner.timer().snapshot());
    eprintln!("{HELP}");

    let driver = tokio::spawn(run_session(runner, cmd_rx, out_tx));
    tokio::spawn(read_commands(cmd_tx.clone()));
    if start
        && cmd_tx
            .send(DriverCommand::Timer(TimerCommand::Start))
            .await
            .is_err()
    {
        tracing::debug!("driver stopped before start");
    }

    while let Some(output) = out_rx.recv().await {
        let completed = matches!(output, DriverOutput::Unsaved(_))
            || matches!(&output, DriverOutput::Event(e) if e.completed_session().is_some());
        print_output(output);
        if completed && once {
            request_shutdown(&cmd_tx).await;
        }
    }

    driver.await?;
    Ok(())
}

async fn read_commands(tx: mpsc::Sender<DriverCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stdin");
                break;
            }
        };
        let command = match parse_command(&line) {
            Some(command) => command,
            None => {
                if !line.trim().is_empty() {
                    eprintln!("{HELP}");
                }
                continue;
            }
        };
        let quit = command == DriverCommand::Shutdown;
        if tx.send(command).await.is_err() || quit {
            return;
        }
    }
    // EOF behaves like quit.
    request_shutdown(&tx).await;
}

/// Ask the driver to stop. A driver that already stopped needs nothing.
async fn request_shutdown(tx: &mpsc::Sender<DriverCommand>) {
    if tx.send(DriverCommand::Shutdown).await.is_err() {
        tracing::debug!("driver already stopped");
    }
}

fn parse_command(line: &str) -> Option<DriverCommand> {
    let mut words = line.split_whitespace();
    let timer = |command| Some(DriverCommand::Timer(command));
    match words.next()? {
        "s" | "start" => timer(TimerCommand::Start),
        "p" | "pause" => timer(TimerCommand::Pause),
        "r" | "reset" => timer(TimerCommand::Reset),
        "b" | "background" => timer(TimerCommand::Lifecycle {
            state: LifecycleState::Background,
        }),
        "f" | "foreground" => timer(TimerCommand::Lifecycle {
            state: LifecycleState::Active,
        }),
        "c" | "configure" => timer(TimerCommand::Configure {
            minutes: words.next().unwrap_or_default().to_string(),
            seconds: words.next().unwrap_or_default().to_string(),
            category: words.next().map(str::to_string),
        }),
        "q" | "quit" => Some(DriverCommand::Shutdown),
        _ => None,
    }
}

fn print_output(output: DriverOutput) {
    match output {
        DriverOutput::Tick { remaining_secs } => {
            print!("\r{}  ", format_clock(remaining_secs));
            let _ = std::io::stdout().flush();
        }
        DriverOutput::Event(event) => print_event(&event),
        DriverOutput::Rejected(e) => eprintln!("error: {e}"),
        DriverOutput::Unsaved(unsaved) => {
            print_session_summary(&unsaved.session);
            eprintln!("error: {unsaved}");
        }
    }
}

fn print_event(event: &Event) {
    match event {
        Event::TimerStarted {
            duration_secs,
            category,
            ..
        } => println!("\rstarted {category} for {}", format_clock(*duration_secs)),
        Event::TimerPaused { remaining_secs, .. } => {
            println!("\rpaused at {}", format_clock(*remaining_secs))
        }
        Event::TimerResumed { remaining_secs, .. } => {
            println!("\rresumed at {}", format_clock(*remaining_secs))
        }
        Event::Distracted {
            distraction_count,
            message,
            ..
        } => println!("\r{message} (distractions: {distraction_count})"),
        Event::SessionCompleted { session, message } => {
            println!("\r{message}");
            print_session_summary(session);
        }
        Event::TimerReset { remaining_secs, .. } => {
            println!("\rreset to {}", format_clock(*remaining_secs))
        }
        Event::StateSnapshot { .. } => print_snapshot(event),
    }
}

fn print_snapshot(event: &Event) {
    if let Event::StateSnapshot {
        state,
        remaining_secs,
        category,
        distraction_count,
        ..
    } = event
    {
        println!(
            "{:?} {} category={} distractions={}",
            state,
            format_clock(*remaining_secs),
            category.as_deref().unwrap_or("-"),
            distraction_count
        );
    }
}

fn print_session_summary(session: &focuslog_core::FocusSession) {
    println!("  category:     {}", session.category);
    println!("  duration:     {}", format_duration(session.duration_seconds));
    println!("  distractions: {}", session.distraction_count);
    println!(
        "  finished:     {}",
        session.finished_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S")
    );
}
