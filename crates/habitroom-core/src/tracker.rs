//! Habit tracker state container.
//!
//! [`HabitTracker`] owns the habit registry, the completion log and the store
//! they are persisted to. Every mutation goes through it, so it is the one
//! place that keeps the two sequences consistent (no orphan completions) and
//! writes them back after each change.
//!
//! ## Usage
//!
//! ```ignore
//! let mut tracker = HabitTracker::load(Database::open()?);
//! let habit = tracker.add_habit("Read", "#22c55e").unwrap();
//! tracker.toggle_completion(&habit.id, calendar::today());
//! let streak = tracker.current_streak(&habit.id);
//! ```

use chrono::{DateTime, Utc};

use crate::calendar::{self, DayKey};
use crate::completion::{CompletionLog, CompletionRecord};
use crate::habit::{Habit, HabitRegistry};
use crate::metrics::{self, DayStatus, HabitSummary};
use crate::storage::{self, Store, COMPLETIONS_KEY, HABITS_KEY, THEME_KEY};
use crate::streak;
use crate::theme::Theme;

pub struct HabitTracker<S: Store> {
    registry: HabitRegistry,
    log: CompletionLog,
    theme: Theme,
    store: S,
}

impl<S: Store> HabitTracker<S> {
    /// Load state from `store`. Missing or corrupt slots start empty.
    pub fn load(store: S) -> Self {
        let habits: Vec<Habit> = storage::load_sequence(&store, HABITS_KEY);
        let records: Vec<CompletionRecord> = storage::load_sequence(&store, COMPLETIONS_KEY);
        let theme = storage::load_value(&store, THEME_KEY).unwrap_or_default();
        tracing::debug!(
            habits = habits.len(),
            completions = records.len(),
            "loaded habit state"
        );

        Self {
            registry: HabitRegistry::from_habits(habits),
            log: CompletionLog::from_records(records),
            theme,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn registry(&self) -> &HabitRegistry {
        &self.registry
    }

    pub fn log(&self) -> &CompletionLog {
        &self.log
    }

    // =========================================================================
    // Habits
    // =========================================================================

    /// Habits in insertion order.
    pub fn habits(&self) -> &[Habit] {
        self.registry.list()
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.registry.get(id)
    }

    /// Find a habit by id or case-insensitive name.
    pub fn find_habit(&self, query: &str) -> Option<&Habit> {
        self.registry.find(query)
    }

    /// Add a habit created now. Blank names are ignored and return `None`.
    pub fn add_habit(&mut self, name: &str, color: &str) -> Option<Habit> {
        self.add_habit_at(name, color, Utc::now())
    }

    pub fn add_habit_at(&mut self, name: &str, color: &str, now: DateTime<Utc>) -> Option<Habit> {
        let habit = self.registry.add(name, color, now)?;
        tracing::debug!(id = %habit.id, name = %habit.name, "added habit");
        self.persist_habits();
        Some(habit)
    }

    /// Delete a habit and every completion recorded for it.
    ///
    /// Unknown ids are a no-op for the registry, but stray completions with
    /// that id are still purged.
    pub fn delete_habit(&mut self, id: &str) {
        let removed = self.registry.remove(id);
        let purged = self.log.remove_habit(id);
        tracing::debug!(id, found = removed.is_some(), purged, "deleted habit");

        if removed.is_some() {
            self.persist_habits();
        }
        if purged > 0 {
            self.persist_completions();
        }
    }

    // =========================================================================
    // Completions
    // =========================================================================

    /// Flip the completion state of `habit_id` on `day`.
    ///
    /// Returns the new state, or `None` if the habit does not exist (in which
    /// case nothing is recorded).
    pub fn toggle_completion(&mut self, habit_id: &str, day: DayKey) -> Option<bool> {
        if !self.registry.contains(habit_id) {
            tracing::debug!(habit_id, %day, "ignoring toggle for unknown habit");
            return None;
        }
        let completed = self.log.toggle(habit_id, day);
        tracing::debug!(habit_id, %day, completed, "toggled completion");
        self.persist_completions();
        Some(completed)
    }

    /// Toggle `habit_id` for the local calendar day of `ts`.
    pub fn toggle_completion_at<Tz: chrono::TimeZone>(
        &mut self,
        habit_id: &str,
        ts: &DateTime<Tz>,
    ) -> Option<bool> {
        self.toggle_completion(habit_id, calendar::canonical_day(ts))
    }

    pub fn is_completed(&self, habit_id: &str, day: DayKey) -> bool {
        self.log.is_completed(habit_id, day)
    }

    pub fn completions_for(&self, habit_id: &str) -> Vec<&CompletionRecord> {
        self.log.completions_for(habit_id)
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Current streak ending today, or 0 for an unknown habit.
    pub fn current_streak(&self, habit_id: &str) -> u32 {
        self.current_streak_on(habit_id, calendar::today())
    }

    pub fn current_streak_on(&self, habit_id: &str, today: DayKey) -> u32 {
        if !self.registry.contains(habit_id) {
            return 0;
        }
        streak::current_streak(habit_id, &self.log, today)
    }

    /// Completion rate in percent, or `None` for an unknown habit.
    pub fn completion_rate(&self, habit_id: &str) -> Option<u32> {
        self.completion_rate_at(habit_id, Utc::now())
    }

    pub fn completion_rate_at(&self, habit_id: &str, now: DateTime<Utc>) -> Option<u32> {
        let habit = self.registry.get(habit_id)?;
        Some(metrics::completion_rate(habit, &self.log, now))
    }

    pub fn total_completions(&self, habit_id: &str) -> Option<u32> {
        let habit = self.registry.get(habit_id)?;
        Some(metrics::total_completions(habit, &self.log))
    }

    pub fn recent_days(&self, habit_id: &str, today: DayKey, days: u32) -> Vec<DayStatus> {
        metrics::recent_days(habit_id, &self.log, today, days)
    }

    pub fn summary_at(&self, habit_id: &str, now: DateTime<Utc>) -> Option<HabitSummary> {
        let habit = self.registry.get(habit_id)?;
        Some(HabitSummary::compute(habit, &self.log, now))
    }

    /// Summaries for every habit, in insertion order.
    pub fn summaries_at(&self, now: DateTime<Utc>) -> Vec<HabitSummary> {
        self.registry
            .list()
            .iter()
            .map(|habit| HabitSummary::compute(habit, &self.log, now))
            .collect()
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = storage::save_value(&mut self.store, THEME_KEY, &theme) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_habits(&mut self) {
        if let Err(e) = storage::save_sequence(&mut self.store, HABITS_KEY, self.registry.list()) {
            tracing::warn!(error = %e, "failed to persist habits");
        }
    }

    fn persist_completions(&mut self) {
        if let Err(e) = storage::save_sequence(&mut self.store, COMPLETIONS_KEY, self.log.records())
        {
            tracing::warn!(error = %e, "failed to persist completions");
        }
    }
}
