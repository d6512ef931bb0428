//! Settings persistence coordination.
//!
//! Provides type-safe loading and saving of serializable settings to
//! eframe's persistent storage. Settings are stored as JSON strings.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted picker configuration.
pub const CONFIG_STORAGE_KEY: &str = "picker_config";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Returns the deserialized value if found and valid, otherwise the
    /// provided default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use rpicker::PickerConfig;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_config() {
        let mut storage = MockStorage::new();
        let config = PickerConfig {
            max_selection_limit: 12,
            page_batch_size: 50,
            items_per_row: 4,
        };

        SettingsCoordinator::save_setting(&mut storage, CONFIG_STORAGE_KEY, &config);
        let loaded: PickerConfig = SettingsCoordinator::load_setting_or(
            Some(&storage),
            CONFIG_STORAGE_KEY,
            PickerConfig::default(),
        );
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let storage = MockStorage::new();
        let loaded: PickerConfig = SettingsCoordinator::load_setting_or(
            Some(&storage),
            "missing",
            PickerConfig::default(),
        );
        assert_eq!(loaded, PickerConfig::default());
    }

    #[test]
    fn test_corrupt_json_yields_default() {
        let mut storage = MockStorage::new();
        storage.set_string(CONFIG_STORAGE_KEY, "{not json".to_owned());
        let loaded: PickerConfig = SettingsCoordinator::load_setting_or(
            Some(&storage),
            CONFIG_STORAGE_KEY,
            PickerConfig::default(),
        );
        assert_eq!(loaded, PickerConfig::default());
    }
}
