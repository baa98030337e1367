//! Integration tests for the habit tracker.
//!
//! Drives the public API end to end: habits and completions go through
//! `HabitTracker`, are persisted to a SQLite file, and derived values are
//! checked after reopening.

use chrono::{Duration, Local, TimeZone, Utc};
use habitroom_core::calendar::{self, sub_days};
use habitroom_core::{Database, HabitTracker, MemoryStore, Store, Theme, PALETTE};

#[test]
fn test_full_habit_workflow_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habitroom.db");
    let today = calendar::today();

    let (read_id, run_id) = {
        let mut tracker = HabitTracker::load(Database::open_at(&path).unwrap());
        let read = tracker.add_habit("Read", PALETTE[5]).unwrap();
        let run = tracker.add_habit("Run", PALETTE[3]).unwrap();

        // Read: yesterday through four days ago, today still open.
        for offset in 1..=4 {
            tracker.toggle_completion(&read.id, sub_days(today, offset));
        }
        // Run: today and two days ago, with a gap yesterday.
        tracker.toggle_completion(&run.id, today);
        tracker.toggle_completion(&run.id, sub_days(today, 2));
        tracker.set_theme(Theme::Light);

        (read.id, run.id)
    };

    let mut tracker = HabitTracker::load(Database::open_at(&path).unwrap());
    let names: Vec<_> = tracker.habits().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Read", "Run"]);
    assert_eq!(tracker.theme(), Theme::Light);

    assert_eq!(tracker.current_streak(&read_id), 4);
    assert_eq!(tracker.current_streak(&run_id), 1);

    tracker.toggle_completion(&read_id, today);
    assert_eq!(tracker.current_streak(&read_id), 5);

    tracker.delete_habit(&read_id);
    assert!(tracker.completions_for(&read_id).is_empty());

    let tracker = HabitTracker::load(Database::open_at(&path).unwrap());
    assert_eq!(tracker.habits().len(), 1);
    assert!(tracker.completions_for(&read_id).is_empty());
    assert_eq!(tracker.completions_for(&run_id).len(), 2);
}

#[test]
fn test_completion_rate_over_first_week() {
    let created = Local
        .with_ymd_and_hms(2024, 9, 2, 8, 30, 0)
        .single()
        .unwrap()
        .with_timezone(&Utc);
    let mut tracker = HabitTracker::load(MemoryStore::new());
    let habit = tracker.add_habit_at("Meditate", PALETTE[6], created).unwrap();

    assert_eq!(tracker.completion_rate_at(&habit.id, created), Some(0));

    let first_day = calendar::canonical_day(&created);
    tracker.toggle_completion(&habit.id, first_day);
    assert_eq!(tracker.completion_rate_at(&habit.id, created), Some(100));

    // Seven days in, with completions on three of them.
    let week_later = created + Duration::days(6);
    tracker.toggle_completion(&habit.id, calendar::add_days(first_day, 2));
    tracker.toggle_completion(&habit.id, calendar::add_days(first_day, 6));
    assert_eq!(tracker.completion_rate_at(&habit.id, week_later), Some(43));
    assert_eq!(tracker.total_completions(&habit.id), Some(3));
}

#[test]
fn test_persisted_layout_matches_slots() {
    let mut tracker = HabitTracker::load(MemoryStore::new());
    let habit = tracker.add_habit("Floss", PALETTE[1]).unwrap();
    tracker.toggle_completion(&habit.id, calendar::today());

    let store = tracker.into_store();
    let completions: serde_json::Value =
        serde_json::from_str(&store.load_raw("completions").unwrap().unwrap()).unwrap();
    let record = &completions[0];
    assert_eq!(record["habitId"], habit.id.as_str());
    assert_eq!(record["date"], calendar::today().to_string());
    assert_eq!(record["completed"], true);
    assert!(record["id"].is_string());

    assert!(store.load_raw("theme").unwrap().is_none());
}
