//! # Habitroom Core Library
//!
//! This library provides the core logic for Habitroom, a daily habit tracker.
//! All operations are available through the in-process API; the CLI binary is
//! a thin layer that prints the same derived values as JSON.
//!
//! ## Architecture
//!
//! - **Calendar**: canonical `YYYY-MM-DD` day keys and day arithmetic
//! - **Registry**: habit definitions in insertion order
//! - **Completion log**: one record per (habit, day), flipped by toggles
//! - **Engines**: streaks and completion metrics, recomputed on every read
//! - **Storage**: key-value slots (SQLite or in-memory) and TOML configuration
//!
//! ## Key Components
//!
//! - [`HabitTracker`]: State container owning habits, completions and the store
//! - [`Store`]: Trait for key-value persistence
//! - [`Database`]: SQLite-backed store
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod completion;
pub mod error;
pub mod habit;
pub mod metrics;
pub mod storage;
pub mod streak;
pub mod theme;
pub mod tracker;

pub use calendar::DayKey;
pub use completion::{CompletionLog, CompletionRecord};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use habit::{Habit, HabitRegistry, DEFAULT_COLOR, PALETTE};
pub use metrics::{DayStatus, HabitSummary};
pub use storage::{Config, Database, MemoryStore, Store};
pub use theme::Theme;
pub use tracker::HabitTracker;
