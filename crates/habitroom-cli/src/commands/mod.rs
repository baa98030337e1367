pub mod config;
pub mod habit;
pub mod history;
pub mod stats;
pub mod theme;
pub mod toggle;

use habitroom_core::{Config, Database, Habit, HabitTracker, ValidationError};
use serde::Serialize;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the habit database named by the config and load its state.
pub fn open_tracker() -> Result<HabitTracker<Database>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let path = config.database_path()?;
    tracing::debug!(path = %path.display(), "opening habit database");
    let db = Database::open_at(&path)?;
    Ok(HabitTracker::load(db))
}

/// Resolve a habit by id or name, cloning it out of the tracker.
pub fn resolve_habit(
    tracker: &HabitTracker<Database>,
    query: &str,
) -> Result<Habit, ValidationError> {
    tracker
        .find_habit(query)
        .cloned()
        .ok_or_else(|| ValidationError::UnknownHabit(query.to_string()))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
