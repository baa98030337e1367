mod config;
pub mod database;
pub mod memory;

pub use config::{Config, HabitsConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StorageError};

/// Slot holding the serialized habit sequence.
pub const HABITS_KEY: &str = "habits";
/// Slot holding the serialized completion-record sequence.
pub const COMPLETIONS_KEY: &str = "completions";
/// Slot holding the serialized theme preference.
pub const THEME_KEY: &str = "theme";

/// Key-value persistence for serialized state.
///
/// Values are opaque strings; the typed helpers [`load_sequence`] and
/// [`save_sequence`] handle JSON encoding.
pub trait Store {
    /// Raw value stored under `key`, if any.
    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load the JSON value under `key`.
///
/// Missing, unreadable or malformed data all come back as `None`; the
/// failure is logged, never returned.
pub fn load_value<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<T> {
    let raw = match store.load_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding corrupt stored value");
            None
        }
    }
}

/// Load the sequence under `key`, or an empty one if it is missing or corrupt.
pub fn load_sequence<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Vec<T> {
    load_value(store, key).unwrap_or_default()
}

/// Serialize `value` as JSON and write it under `key`.
pub fn save_value<T: Serialize + ?Sized>(
    store: &mut dyn Store,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.save_raw(key, &json)
}

/// Rewrite the full sequence under `key`.
pub fn save_sequence<T: Serialize>(
    store: &mut dyn Store,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    save_value(store, key, items)
}

/// Returns the data directory, creating it if needed.
///
/// `HABITROOM_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/habitroom/`, or `~/.config/habitroom-dev/` when
/// `HABITROOM_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("HABITROOM_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITROOM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitroom-dev")
            } else {
                base_dir.join("habitroom")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
