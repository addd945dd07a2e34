//! Light/dark theme preference and its stored form.

use crate::kv::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the stored flag. Only `"1"` means dark.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "1" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_flag(self) -> &'static str {
        match self {
            Theme::Dark => "1",
            Theme::Light => "0",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class applied to the app root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "",
        }
    }

    /// Read the preference; a missing entry means light.
    pub fn load(storage: &impl KeyValueStore, key: &str) -> Self {
        storage
            .get(key)
            .map(|flag| Theme::from_flag(&flag))
            .unwrap_or_default()
    }

    pub fn save(self, storage: &impl KeyValueStore, key: &str) -> Result<(), StorageError> {
        storage.set(key, self.as_flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_flag_parsing() {
        assert_eq!(Theme::from_flag("1"), Theme::Dark);
        assert_eq!(Theme::from_flag("0"), Theme::Light);
        assert_eq!(Theme::from_flag("true"), Theme::Light);
    }

    #[test]
    fn test_load_and_save() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store, "dark"), Theme::Light);

        Theme::Light.toggled().save(&store, "dark").unwrap();
        assert_eq!(store.get("dark").as_deref(), Some("1"));
        assert!(Theme::load(&store, "dark").is_dark());
    }
}
