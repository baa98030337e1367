//! Habit management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use habitroom_core::{Config, Habit};

use super::{open_tracker, print_json, resolve_habit, CliResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Display color (defaults to habits.default_color)
        #[arg(long)]
        color: Option<String>,
    },
    /// List all habits
    List,
    /// Show one habit with its streak and completion rate
    Show {
        /// Habit id or name
        habit: String,
    },
    /// Delete a habit and all of its completions
    Delete {
        /// Habit id or name
        habit: String,
    },
}

pub fn run(action: HabitAction) -> CliResult {
    let mut tracker = open_tracker()?;

    match action {
        HabitAction::Add { name, color } => {
            let color = color.unwrap_or_else(|| Config::load_or_default().habits.default_color);
            match tracker.add_habit(&name, &color) {
                Some(habit) => print_json(&habit)?,
                None => {
                    eprintln!("Habit name is empty; nothing added");
                    print_json(&None::<Habit>)?;
                }
            }
        }
        HabitAction::List => {
            print_json(tracker.habits())?;
        }
        HabitAction::Show { habit } => {
            let habit = resolve_habit(&tracker, &habit)?;
            if let Some(summary) = tracker.summary_at(&habit.id, Utc::now()) {
                print_json(&summary)?;
            }
        }
        HabitAction::Delete { habit } => {
            let habit = resolve_habit(&tracker, &habit)?;
            tracker.delete_habit(&habit.id);
            print_json(&habit)?;
        }
    }
    Ok(())
}
