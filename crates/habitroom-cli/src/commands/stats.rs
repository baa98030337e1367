use chrono::Utc;
use clap::Args;

use super::{open_tracker, print_json, resolve_habit, CliResult};

#[derive(Args)]
pub struct StatsArgs {
    /// Habit id or name (all habits when omitted)
    pub habit: Option<String>,
}

pub fn run(args: StatsArgs) -> CliResult {
    let tracker = open_tracker()?;
    let now = Utc::now();

    match args.habit {
        Some(query) => {
            let habit = resolve_habit(&tracker, &query)?;
            if let Some(summary) = tracker.summary_at(&habit.id, now) {
                print_json(&summary)?;
            }
        }
        None => print_json(&tracker.summaries_at(now))?,
    }
    Ok(())
}
