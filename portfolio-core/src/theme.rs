use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: Theme = Theme::Light;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_os_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Icon for the toggle button: offers the opposite theme.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Single key-value preference slot.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Resolves and persists the page theme. Rendering is left to the caller.
pub struct ThemeManager<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            current: DEFAULT_THEME,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Valid persisted preference, if any. Unknown strings count as unset.
    pub fn persisted(&self) -> Option<Theme> {
        self.store
            .get(&self.key)
            .and_then(|value| value.parse::<Theme>().ok())
    }

    pub fn initialize(&mut self, os_prefers_dark: bool) -> Theme {
        let theme = match self.persisted() {
            Some(theme) => theme,
            None => {
                let theme = Theme::from_os_preference(os_prefers_dark);
                self.store.set(&self.key, theme.as_str());
                tracing::debug!("No stored theme, adopted OS preference: {}", theme);
                theme
            }
        };
        self.current = theme;
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.store.set(&self.key, next.as_str());
        self.current = next;
        next
    }

    /// OS scheme changed. Only followed while nothing is persisted.
    pub fn on_system_change(&mut self, is_dark: bool) -> Option<Theme> {
        if self.persisted().is_some() {
            return None;
        }
        let theme = Theme::from_os_preference(is_dark);
        self.current = theme;
        Some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "theme";

    #[test]
    fn unset_preference_adopts_dark_os_and_persists_it() {
        let mut manager = ThemeManager::new(MemoryStore::new(), KEY);
        assert_eq!(manager.initialize(true), Theme::Dark);
        assert_eq!(manager.store().get(KEY).as_deref(), Some("dark"));
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn unset_preference_defaults_to_light() {
        let mut manager = ThemeManager::new(MemoryStore::new(), KEY);
        assert_eq!(manager.initialize(false), Theme::Light);
        assert_eq!(manager.store().get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn persisted_light_ignores_os_preference() {
        let mut manager = ThemeManager::new(MemoryStore::with_value(KEY, "light"), KEY);
        assert_eq!(manager.initialize(true), Theme::Light);
        assert_eq!(manager.store().get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn invalid_stored_value_counts_as_unset() {
        let mut manager = ThemeManager::new(MemoryStore::with_value(KEY, "sepia"), KEY);
        assert_eq!(manager.persisted(), None);
        assert_eq!(manager.initialize(true), Theme::Dark);
        assert_eq!(manager.store().get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_twice_restores_persisted_value() {
        let mut manager = ThemeManager::new(MemoryStore::with_value(KEY, "light"), KEY);
        manager.initialize(false);
        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(manager.store().get(KEY).as_deref(), Some("dark"));
        assert_eq!(manager.toggle(), Theme::Light);
        assert_eq!(manager.store().get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn system_change_ignored_once_preference_persisted() {
        let mut manager = ThemeManager::new(MemoryStore::new(), KEY);
        manager.initialize(false);
        assert_eq!(manager.on_system_change(true), None);
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn system_change_followed_without_preference() {
        // Never initialized, so nothing has been written yet.
        let mut manager = ThemeManager::new(MemoryStore::new(), KEY);
        assert_eq!(manager.on_system_change(true), Some(Theme::Dark));
        assert_eq!(manager.on_system_change(false), Some(Theme::Light));
        assert_eq!(manager.store().get(KEY), None);
    }

    #[test]
    fn icon_offers_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
    }

    #[test]
    fn theme_string_forms() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
