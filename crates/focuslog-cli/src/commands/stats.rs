use chrono::Local;
use clap::Subcommand;
use focuslog_core::stats::{category_distribution, last_7_days_series};
use focuslog_core::storage::{Database, SessionStore};
use focuslog_core::Report;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Totals for today and all time, with the seven-day series and categories
    Summary,
    /// Focus minutes for each of the last seven days
    Week,
    /// Focus minutes per category
    Categories,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::new(Database::open()?);
    let sessions = store.load()?;
    let today = Local::now().date_naive();

    let json = match action {
        StatsAction::Summary => serde_json::to_string_pretty(&Report::build(&sessions, today))?,
        StatsAction::Week => serde_json::to_string_pretty(&last_7_days_series(&sessions, today))?,
        StatsAction::Categories => serde_json::to_string_pretty(&category_distribution(&sessions))?,
    };
    println!("{json}");
    Ok(())
}
