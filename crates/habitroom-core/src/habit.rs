//! Habit definitions and the registry that owns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display colors offered when creating a habit.
pub const PALETTE: [&str; 8] = [
    "#ef4444", // red
    "#f97316", // orange
    "#eab308", // yellow
    "#22c55e", // green
    "#14b8a6", // teal
    "#3b82f6", // blue
    "#8b5cf6", // violet
    "#ec4899", // pink
];

pub const DEFAULT_COLOR: &str = PALETTE[0];

/// A recurring habit the user tracks day by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Display only; any string is accepted.
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Ordered collection of habits, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitRegistry {
    habits: Vec<Habit>,
}

impl HabitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// Add a habit named `name` (trimmed), created at `now`.
    ///
    /// Returns `None` without touching the registry when the trimmed name is
    /// empty.
    pub fn add(&mut self, name: &str, color: &str, now: DateTime<Utc>) -> Option<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.to_string(),
            created_at: now,
        };
        self.habits.push(habit.clone());
        Some(habit)
    }

    /// Remove the habit with `id`, if present.
    pub fn remove(&mut self, id: &str) -> Option<Habit> {
        let index = self.habits.iter().position(|h| h.id == id)?;
        Some(self.habits.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Look a habit up by exact id, falling back to a case-insensitive name
    /// match. The first habit in insertion order wins on duplicate names.
    pub fn find(&self, query: &str) -> Option<&Habit> {
        let query = query.trim();
        self.get(query).or_else(|| {
            let lowered = query.to_lowercase();
            self.habits.iter().find(|h| h.name.to_lowercase() == lowered)
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
