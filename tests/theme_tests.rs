// Host-side tests for the theme controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod theme {
    include!("../src/core/theme.rs");
}

use std::collections::HashMap;
use theme::*;

/// In-memory stand-in for `localStorage`. `available = false` behaves like
/// a browser that refuses storage access.
struct MemoryStore {
    values: HashMap<String, String>,
    available: bool,
}

impl MemoryStore {
    fn empty() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
        }
    }

    fn with(value: &str) -> Self {
        let mut s = Self::empty();
        s.values.insert(THEME_STORAGE_KEY.to_string(), value.to_string());
        s
    }

    fn unavailable() -> Self {
        Self {
            values: HashMap::new(),
            available: false,
        }
    }

    fn saved(&self) -> Option<&str> {
        self.values.get(THEME_STORAGE_KEY).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> bool {
        if !self.available {
            return false;
        }
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

#[test]
fn system_preference_applies_without_saved_theme() {
    assert_eq!(
        ThemeController::new(MemoryStore::empty(), true).applied(),
        Theme::Dark
    );
    assert_eq!(
        ThemeController::new(MemoryStore::empty(), false).applied(),
        Theme::Light
    );
}

#[test]
fn saved_theme_overrides_system_preference() {
    for system_dark in [false, true] {
        let dark = ThemeController::new(MemoryStore::with("dark"), system_dark);
        assert_eq!(dark.applied(), Theme::Dark);
        let light = ThemeController::new(MemoryStore::with("light"), system_dark);
        assert_eq!(light.applied(), Theme::Light);
    }
}

#[test]
fn unrecognized_saved_value_counts_as_light() {
    let c = ThemeController::new(MemoryStore::with("sepia"), true);
    assert_eq!(c.applied(), Theme::Light);
    assert!(c.has_explicit_preference());
}

#[test]
fn empty_saved_value_means_no_preference() {
    let c = ThemeController::new(MemoryStore::with(""), true);
    assert_eq!(c.applied(), Theme::Dark);
    assert!(!c.has_explicit_preference());
}

#[test]
fn double_toggle_restores_theme_and_persisted_value() {
    let mut c = ThemeController::new(MemoryStore::with("light"), false);
    let before = c.applied();
    c.toggle();
    assert_eq!(c.store().saved(), Some("dark"));
    c.toggle();
    assert_eq!(c.applied(), before);
    assert_eq!(c.store().saved(), Some("light"));
}

#[test]
fn toggle_persists_the_new_theme() {
    let mut c = ThemeController::new(MemoryStore::empty(), false);
    assert_eq!(c.toggle(), Theme::Dark);
    assert_eq!(c.store().saved(), Some("dark"));
    assert!(c.has_explicit_preference());
}

#[test]
fn system_change_ignored_with_saved_preference() {
    let mut c = ThemeController::new(MemoryStore::with("light"), false);
    assert_eq!(c.on_system_change(true), None);
    assert_eq!(c.applied(), Theme::Light);
}

#[test]
fn system_change_followed_without_saved_preference() {
    let mut c = ThemeController::new(MemoryStore::empty(), false);
    assert_eq!(c.on_system_change(true), Some(Theme::Dark));
    assert_eq!(c.applied(), Theme::Dark);
    // no change reported when the theme already matches
    assert_eq!(c.on_system_change(true), None);
    assert_eq!(c.on_system_change(false), Some(Theme::Light));
}

#[test]
fn explicit_choice_holds_when_storage_is_unavailable() {
    let mut c = ThemeController::new(MemoryStore::unavailable(), true);
    assert_eq!(c.applied(), Theme::Dark);
    assert!(!c.has_explicit_preference());

    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(c.store().saved(), None);
    assert_eq!(c.on_system_change(true), None);
    assert_eq!(c.applied(), Theme::Light);
}

#[test]
fn theme_names_match_storage_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}
