//! Dark/light display mode, persisted under a single localStorage key.

use log::{debug, info};
use web_sys::window;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeState {
    Light,
    #[default]
    Dark,
}

impl ThemeState {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    /// Only `"dark"` selects dark; any other non-empty value selects light. Empty counts as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(ThemeState::Dark),
            _ => Some(ThemeState::Light),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }
}

/// Where the theme preference lives between visits.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Browser localStorage. Every failure (no window, storage disabled, quota) is ignored.
pub struct LocalStore;

impl ThemeStore for LocalStore {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
            .flatten()
    }

    fn save(&self, value: &str) {
        match window().and_then(|w| w.local_storage().ok()).flatten() {
            Some(storage) => {
                if storage.set_item(config::THEME_STORAGE_KEY, value).is_err() {
                    debug!("Could not persist theme preference");
                }
            }
            None => debug!("localStorage unavailable, theme preference not persisted"),
        }
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    theme: ThemeState,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn init(store: S) -> Self {
        let theme = store
            .load()
            .as_deref()
            .and_then(ThemeState::parse)
            .unwrap_or_default();
        debug!("Initial theme: {}", theme.as_str());
        store.save(theme.as_str());
        Self { store, theme }
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeState) {
        self.theme = theme;
        self.store.save(theme.as_str());
        info!("Theme set to {}", theme.as_str());
    }

    pub fn toggle(&mut self) -> ThemeState {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Puts the theme name on `<body>` so page-level CSS can key off it.
pub fn apply(theme: ThemeState) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        body.set_class_name(theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn with_value(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
            }
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn missing_preference_defaults_to_dark() {
        let controller = ThemeController::init(MemoryStore::default());
        assert_eq!(controller.theme(), ThemeState::Dark);
    }

    #[test]
    fn persisted_preference_wins_over_default() {
        for theme in [ThemeState::Light, ThemeState::Dark] {
            let controller = ThemeController::init(MemoryStore::with_value(theme.as_str()));
            assert_eq!(controller.theme(), theme);
        }
    }

    #[test]
    fn unrecognized_preference_means_light() {
        for stored in ["sepia", "DARK", "Light", "true"] {
            let controller = ThemeController::init(MemoryStore::with_value(stored));
            assert_eq!(controller.theme(), ThemeState::Light, "stored {stored:?}");
        }
    }

    #[test]
    fn empty_preference_counts_as_missing() {
        let controller = ThemeController::init(MemoryStore::with_value(""));
        assert_eq!(controller.theme(), ThemeState::Dark);
    }

    #[test]
    fn init_persists_the_resolved_theme() {
        let controller = ThemeController::init(MemoryStore::default());
        assert_eq!(controller.store().load().as_deref(), Some("dark"));

        let controller = ThemeController::init(MemoryStore::with_value("sepia"));
        assert_eq!(controller.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn set_theme_writes_through_to_store() {
        let mut controller = ThemeController::init(MemoryStore::default());
        controller.set_theme(ThemeState::Light);
        assert_eq!(controller.store().load().as_deref(), Some("light"));
        controller.set_theme(ThemeState::Dark);
        assert_eq!(controller.store().load().as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut controller = ThemeController::init(MemoryStore::with_value("light"));
        assert_eq!(controller.toggle(), ThemeState::Dark);
        assert_eq!(controller.store().load().as_deref(), Some("dark"));
        assert_eq!(controller.toggle(), ThemeState::Light);
        assert_eq!(controller.theme(), ThemeState::Light);
    }
}
