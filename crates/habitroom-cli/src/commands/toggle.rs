use clap::Args;
use habitroom_core::{calendar, DayKey};
use serde::Serialize;

use super::{open_tracker, print_json, resolve_habit, CliResult};

#[derive(Args)]
pub struct ToggleArgs {
    /// Habit id or name
    pub habit: String,
    /// Day to toggle as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<DayKey>,
}

#[derive(Serialize)]
struct ToggleOutput {
    habit_id: String,
    date: DayKey,
    completed: bool,
    current_streak: u32,
}

pub fn run(args: ToggleArgs) -> CliResult {
    let mut tracker = open_tracker()?;
    let habit = resolve_habit(&tracker, &args.habit)?;
    let date = args.date.unwrap_or_else(calendar::today);

    let completed = tracker.toggle_completion(&habit.id, date).unwrap_or(false);
    print_json(&ToggleOutput {
        current_streak: tracker.current_streak(&habit.id),
        habit_id: habit.id,
        date,
        completed,
    })
}
