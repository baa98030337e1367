//! Completion-rate and aggregate metrics for a habit.
//!
//! All values are recomputed from the current log on every call. Callers that
//! need to avoid the recomputation can memoize on
//! `(habit.id, CompletionLog::version())`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{canonical_day, days_between_inclusive, sub_days, DayKey};
use crate::completion::CompletionLog;
use crate::habit::Habit;
use crate::streak::{current_streak, longest_streak};

/// Number of days `habit` is marked done, across the whole log.
pub fn total_completions(habit: &Habit, log: &CompletionLog) -> u32 {
    let count = log
        .records()
        .iter()
        .filter(|r| r.habit_id == habit.id && r.completed)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Completed days as a rounded percentage of days since the habit was created.
///
/// The numerator counts every completed record for the habit, including ones
/// dated before `created_at`, so the result can exceed 100.
pub fn completion_rate(habit: &Habit, log: &CompletionLog, now: DateTime<Utc>) -> u32 {
    let days_elapsed =
        days_between_inclusive(canonical_day(&habit.created_at), canonical_day(&now)).max(1);
    let completed = f64::from(total_completions(habit, log));
    (100.0 * completed / days_elapsed as f64).round() as u32
}

/// One cell of a recent-days strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: DayKey,
    pub completed: bool,
}

/// The last `days` days ending at `today`, oldest first.
pub fn recent_days(
    habit_id: &str,
    log: &CompletionLog,
    today: DayKey,
    days: u32,
) -> Vec<DayStatus> {
    (0..u64::from(days))
        .rev()
        .map(|offset| {
            let date = sub_days(today, offset);
            DayStatus {
                date,
                completed: log.is_completed(habit_id, date),
            }
        })
        .collect()
}

/// Derived values for one habit, as a renderer reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub color: String,
    pub completed_today: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Percent, may exceed 100.
    pub completion_rate: u32,
    pub total_completions: u32,
}

impl HabitSummary {
    pub fn compute(habit: &Habit, log: &CompletionLog, now: DateTime<Utc>) -> Self {
        let today = canonical_day(&now);
        Self {
            id: habit.id.clone(),
            name: habit.name.clone(),
            color: habit.color.clone(),
            completed_today: log.is_completed(&habit.id, today),
            current_streak: current_streak(&habit.id, log, today),
            longest_streak: longest_streak(&habit.id, log),
            completion_rate: completion_rate(habit, log, now),
            total_completions: total_completions(habit, log),
        }
    }
}
