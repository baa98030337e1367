//! Streak engine.
//!
//! A streak is the number of consecutive completed days ending at today. An
//! unfinished today does not break it: the walk may step over today once,
//! without counting it, and continue from yesterday. Any other missing day
//! ends the walk.

use crate::calendar::{add_days, sub_days, DayKey};
use crate::completion::CompletionLog;

/// Current streak for `habit_id`, walking backward from `today`.
pub fn current_streak(habit_id: &str, log: &CompletionLog, today: DayKey) -> u32 {
    let done = log.completed_days(habit_id);
    let mut cursor = today;
    let mut streak = 0u32;

    loop {
        if done.contains(&cursor) {
            streak += 1;
        } else if streak > 0 || cursor != today {
            break;
        }
        // An open today falls through here without being counted.

        let previous = sub_days(cursor, 1);
        if previous == cursor {
            break;
        }
        cursor = previous;
    }

    streak
}

/// Longest run of consecutive completed days anywhere in the log.
pub fn longest_streak(habit_id: &str, log: &CompletionLog) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<DayKey> = None;

    for day in log.completed_days(habit_id) {
        run = match previous {
            Some(prev) if add_days(prev, 1) == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> DayKey {
        DayKey::from_ymd(2024, 3, 3).unwrap()
    }

    fn log_with(offsets: &[u64]) -> CompletionLog {
        let mut log = CompletionLog::new();
        for &offset in offsets {
            log.toggle("h1", sub_days(today(), offset));
        }
        log
    }

    #[test]
    fn no_records_means_zero() {
        assert_eq!(current_streak("h1", &CompletionLog::new(), today()), 0);
    }

    #[test]
    fn five_consecutive_days_ending_today() {
        let log = log_with(&[0, 1, 2, 3, 4]);
        assert_eq!(current_streak("h1", &log, today()), 5);
    }

    #[test]
    fn open_today_keeps_yesterdays_chain() {
        let log = log_with(&[1, 2, 3, 4]);
        assert_eq!(current_streak("h1", &log, today()), 4);
    }

    #[test]
    fn one_day_gap_breaks_the_streak() {
        let log = log_with(&[0, 2]);
        assert_eq!(current_streak("h1", &log, today()), 1);
    }

    #[test]
    fn today_and_yesterday_open_is_zero() {
        let log = log_with(&[2, 3, 4]);
        assert_eq!(current_streak("h1", &log, today()), 0);
    }

    #[test]
    fn only_today_gets_a_pass() {
        // Yesterday done, the day before missing: the miss is not skipped.
        let log = log_with(&[1, 3, 4]);
        assert_eq!(current_streak("h1", &log, today()), 1);
    }

    #[test]
    fn unchecked_record_counts_as_missing() {
        let mut log = log_with(&[0, 1, 2]);
        log.toggle("h1", sub_days(today(), 1));
        assert_eq!(current_streak("h1", &log, today()), 1);
    }

    #[test]
    fn future_records_are_ignored() {
        let mut log = log_with(&[0, 1]);
        log.toggle("h1", add_days(today(), 1));
        assert_eq!(current_streak("h1", &log, today()), 2);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        // today is March 3rd; walk back through Feb 29th in a leap year
        let log = log_with(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(sub_days(today(), 3), DayKey::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(current_streak("h1", &log, today()), 6);
    }

    #[test]
    fn other_habits_do_not_contribute() {
        let mut log = log_with(&[0, 1]);
        log.toggle("h2", sub_days(today(), 2));
        assert_eq!(current_streak("h1", &log, today()), 2);
        assert_eq!(current_streak("h2", &log, today()), 0);
    }

    #[test]
    fn long_streak_walks_iteratively() {
        let offsets: Vec<u64> = (0..3650).collect();
        let log = log_with(&offsets);
        assert_eq!(current_streak("h1", &log, today()), 3650);
    }

    #[test]
    fn longest_streak_finds_best_run() {
        let log = log_with(&[0, 1, 5, 6, 7, 8, 20]);
        assert_eq!(longest_streak("h1", &log), 4);
        assert_eq!(longest_streak("h1", &CompletionLog::new()), 0);
    }

    #[test]
    fn longest_streak_ignores_unchecked_days() {
        let mut log = log_with(&[0, 1, 2]);
        log.toggle("h1", sub_days(today(), 1));
        assert_eq!(longest_streak("h1", &log), 1);
    }
}
