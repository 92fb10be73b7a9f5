//! Singleton user-preferences slot.
//!
//! The record lives in the same key-value store as the domain collections,
//! under the key the original client used for its browser storage. It is
//! created with defaults on first read and overwritten wholesale on save.

use super::backend::StorageBackend;
use crate::errors::{AppError, AppResult};
use crate::models::preferences::UserPreferences;
use crate::ui::messages::warning;

pub const PREFERENCES_KEY: &str = "devsprint_user_preferences";

/// Read the preferences record, falling back to defaults when the slot is
/// absent or unreadable.
pub fn load_preferences<B: StorageBackend>(backend: &B) -> AppResult<UserPreferences> {
    match backend.get(PREFERENCES_KEY)? {
        None => Ok(UserPreferences::default()),
        Some(value) => match serde_json::from_value(value) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                warning(format!("Stored preferences are unreadable ({e}); using defaults"));
                Ok(UserPreferences::default())
            }
        },
    }
}

/// Overwrite the preferences record.
pub fn save_preferences<B: StorageBackend>(
    backend: &mut B,
    prefs: &UserPreferences,
) -> AppResult<()> {
    let value = serde_json::to_value(prefs).map_err(|e| AppError::Storage(e.to_string()))?;
    backend.put(PREFERENCES_KEY, value)
}
