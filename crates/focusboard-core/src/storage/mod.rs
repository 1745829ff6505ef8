//! Persistence sink for widget records.
//!
//! Every widget stores one JSON record under a fixed key. Loading is
//! forgiving: a missing, unreadable or malformed record means "start from
//! defaults", never an error.

mod config;
pub mod database;

pub use config::{Config, LogConfig, StorageConfig, TimerConfig};
pub use database::Database;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{ConfigError, CoreError, Result};

/// Key of the timer settings record.
pub const SETTINGS_KEY: &str = "pomodoroSettings";
/// Key of the task list record.
pub const TASKS_KEY: &str = "focusTasks";
/// Key of the sticky notes record.
pub const NOTES_KEY: &str = "notes";
/// Key of the saved journal entries.
pub const JOURNAL_KEY: &str = "journalEntries";
/// Key of the journal's show/hide questions flag.
pub const QUESTIONS_VISIBLE_KEY: &str = "journalQuestionsVisible";

/// Key of the in-progress journal answers for `date`, e.g. `answers_2026-01-05`.
pub fn answers_key(date: NaiveDate) -> String {
    format!("answers_{}", date.format("%Y-%m-%d"))
}

/// Returns the data directory, creating it if needed.
///
/// `FOCUSBOARD_DATA_DIR` wins when set. Otherwise `~/.config/focusboard/`,
/// or `~/.config/focusboard-dev/` with `FOCUSBOARD_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("FOCUSBOARD_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join(".config");
            let env = std::env::var("FOCUSBOARD_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("focusboard-dev")
            } else {
                base_dir.join("focusboard")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// String key-value storage.
pub trait Store {
    fn load_raw(&self, key: &str) -> Result<Option<String>>;
    fn save_raw(&self, key: &str, value: &str) -> Result<()>;
}

/// Load and decode a record. Any failure is logged and reported as absent.
pub fn load_record<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<T> {
    let raw = match store.load_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "could not read record, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "malformed record, using defaults");
            None
        }
    }
}

/// [`load_record`] falling back to `T::default()`.
pub fn load_or_default<T: DeserializeOwned + Default>(store: &dyn Store, key: &str) -> T {
    load_record(store, key).unwrap_or_default()
}

/// Encode and store a record.
///
/// # Errors
/// Returns an error if encoding or the underlying store fails.
pub fn save_record<T: Serialize + ?Sized>(store: &dyn Store, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.save_raw(key, &json)
}

/// In-process store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Custom("memory store poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn save_raw(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Custom("memory store poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
