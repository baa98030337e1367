//! Per-day completion records and the log that holds them.
//!
//! The log is stored as a sequence but behaves as a map keyed by
//! `(habit_id, date)`: there is never more than one record for a pair.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::DayKey;

/// Completion state of one habit on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub id: String,
    pub habit_id: String,
    pub date: DayKey,
    pub completed: bool,
}

/// All completion records, in creation order.
#[derive(Debug, Clone, Default)]
pub struct CompletionLog {
    records: Vec<CompletionRecord>,
    /// Bumped on every mutation.
    version: u64,
}

impl PartialEq for CompletionLog {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for CompletionLog {}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from persisted records.
    ///
    /// Later duplicates of a `(habit_id, date)` pair are dropped so the
    /// one-record-per-pair invariant holds even for hand-edited data.
    pub fn from_records(records: Vec<CompletionRecord>) -> Self {
        let mut seen = BTreeSet::new();
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert((record.habit_id.clone(), record.date)) {
                kept.push(record);
            } else {
                tracing::warn!(
                    habit_id = %record.habit_id,
                    date = %record.date,
                    "dropping duplicate completion record"
                );
            }
        }
        Self {
            records: kept,
            version: 0,
        }
    }

    fn find(&self, habit_id: &str, day: DayKey) -> Option<&CompletionRecord> {
        self.records
            .iter()
            .find(|r| r.habit_id == habit_id && r.date == day)
    }

    /// Flip the completion state for `(habit_id, day)` and return the new state.
    ///
    /// The first toggle for a pair creates a record with `completed = true`.
    pub fn toggle(&mut self, habit_id: &str, day: DayKey) -> bool {
        self.version += 1;
        if let Some(record) = self
            .records
            .iter_mut()
            .find(|r| r.habit_id == habit_id && r.date == day)
        {
            record.completed = !record.completed;
            return record.completed;
        }

        self.records.push(CompletionRecord {
            id: Uuid::new_v4().to_string(),
            habit_id: habit_id.to_string(),
            date: day,
            completed: true,
        });
        true
    }

    /// Whether `habit_id` is marked done on `day`. Missing records count as not done.
    pub fn is_completed(&self, habit_id: &str, day: DayKey) -> bool {
        self.find(habit_id, day).is_some_and(|r| r.completed)
    }

    /// Every record for `habit_id`, completed or not.
    pub fn completions_for(&self, habit_id: &str) -> Vec<&CompletionRecord> {
        self.records
            .iter()
            .filter(|r| r.habit_id == habit_id)
            .collect()
    }

    /// Days on which `habit_id` is marked done.
    pub fn completed_days(&self, habit_id: &str) -> BTreeSet<DayKey> {
        self.records
            .iter()
            .filter(|r| r.habit_id == habit_id && r.completed)
            .map(|r| r.date)
            .collect()
    }

    /// Drop every record for `habit_id`. Returns how many were removed.
    pub fn remove_habit(&mut self, habit_id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.habit_id != habit_id);
        let removed = before - self.records.len();
        if removed > 0 {
            self.version += 1;
        }
        removed
    }

    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
