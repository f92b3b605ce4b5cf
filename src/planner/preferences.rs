//! Per-user preference storage.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user's stored travel preferences.
///
/// The whole record is replaced on every save; there are no merge
/// semantics for individual preference flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Named boolean interest flags (e.g. "museums": true).
    pub preferences: HashMap<String, bool>,

    /// Free-form spend bucket (e.g. "moderate", "luxury"). Not validated.
    pub budget: String,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            preferences: HashMap::new(),
            budget: "moderate".to_string(),
        }
    }
}

/// Concurrent map of user id → preference record.
///
/// `DashMap` gives per-key atomic insert and read, so concurrent saves to
/// the same user are last-write-wins but never torn.
#[derive(Default)]
pub struct PreferenceStore {
    records: DashMap<String, PreferenceRecord>,
}

impl PreferenceStore {
    /// Store a record for `user_id`, overwriting any existing one.
    ///
    /// Infallible: no validation of budget values or preference keys.
    pub fn save(&self, user_id: &str, record: PreferenceRecord) {
        self.records.insert(user_id.to_string(), record);
    }

    /// Fetch the record for `user_id`, or the default record
    /// (`{preferences: {}, budget: "moderate"}`) if none was ever saved.
    pub fn get(&self, user_id: &str) -> PreferenceRecord {
        self.records
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_get_round_trips() {
        let store = PreferenceStore::default();
        let record = PreferenceRecord {
            preferences: HashMap::from([("museums".to_string(), true)]),
            budget: "luxury".to_string(),
        };

        store.save("user-1", record.clone());
        assert_eq!(store.get("user-1"), record);
    }

    #[test]
    fn unseen_user_gets_the_default_record() {
        let store = PreferenceStore::default();
        let record = store.get("never-saved");
        assert!(record.preferences.is_empty());
        assert_eq!(record.budget, "moderate");
    }

    #[test]
    fn save_replaces_the_entire_record() {
        let store = PreferenceStore::default();
        store.save(
            "user-1",
            PreferenceRecord {
                preferences: HashMap::from([("museums".to_string(), true)]),
                budget: "moderate".to_string(),
            },
        );
        store.save(
            "user-1",
            PreferenceRecord {
                preferences: HashMap::from([("hiking".to_string(), false)]),
                budget: "budget".to_string(),
            },
        );

        let record = store.get("user-1");
        assert!(!record.preferences.contains_key("museums"));
        assert_eq!(record.budget, "budget");
    }
}
