use clap::Subcommand;
use focuslog_core::stats::history;
use focuslog_core::storage::{Database, SessionStore};

#[derive(Subcommand)]
pub enum SessionsAction {
    /// List completed sessions, newest first
    List {
        /// Show at most this many sessions
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: SessionsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionsAction::List { limit } => {
            let store = SessionStore::new(Database::open()?);
            let sessions = store.load()?;
            let json = serde_json::to_string_pretty(&history(&sessions, limit))?;
            println!("{json}");
        }
    }
    Ok(())
}
