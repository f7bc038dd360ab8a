use clap::Subcommand;
use focuslog_core::Config;

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List selectable categories
    List,
}

pub fn run(action: CategoriesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CategoriesAction::List => {
            let catalog = Config::load()?.catalog();
            let json = serde_json::to_string_pretty(catalog.entries())?;
            println!("{json}");
        }
    }
    Ok(())
}
