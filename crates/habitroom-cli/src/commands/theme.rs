use clap::Subcommand;
use habitroom_core::Theme;

use super::{open_tracker, CliResult};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Get,
    /// Set the theme ("dark" or "light")
    Set { theme: Theme },
    /// Switch between dark and light
    Toggle,
}

pub fn run(action: ThemeAction) -> CliResult {
    let mut tracker = open_tracker()?;

    match action {
        ThemeAction::Get => println!("{}", tracker.theme()),
        ThemeAction::Set { theme } => {
            tracker.set_theme(theme);
            println!("{theme}");
        }
        ThemeAction::Toggle => {
            let theme = tracker.theme().toggled();
            tracker.set_theme(theme);
            println!("{theme}");
        }
    }
    Ok(())
}
