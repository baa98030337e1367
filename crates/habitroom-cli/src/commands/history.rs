use clap::Args;
use habitroom_core::{calendar, Config};

use super::{open_tracker, print_json, resolve_habit, CliResult};

/// Ten years of days; longer strips are rejected or clamped.
const MAX_HISTORY_DAYS: u32 = 3660;

#[derive(Args)]
pub struct HistoryArgs {
    /// Habit id or name
    pub habit: String,
    /// Number of days to show, ending today (defaults to habits.history_days)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=3660))]
    pub days: Option<u32>,
}

pub fn run(args: HistoryArgs) -> CliResult {
    let tracker = open_tracker()?;
    let habit = resolve_habit(&tracker, &args.habit)?;
    let days = args.days.unwrap_or_else(|| {
        Config::load_or_default()
            .habits
            .history_days
            .clamp(1, MAX_HISTORY_DAYS)
    });

    print_json(&tracker.recent_days(&habit.id, calendar::today(), days))
}
