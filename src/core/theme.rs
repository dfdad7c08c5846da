/// Storage key of the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Interpret a stored preference. Only `"dark"` selects dark; any other
    /// non-empty value is an explicit light choice. Empty means unset.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }

    pub fn as_str(self) -> &'static str {
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

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Best-effort key/value persistence. Implementations swallow failures:
/// a missing backend loads nothing and drops writes.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    /// Returns whether the value was persisted.
    fn store(&mut self, key: &str, value: &str) -> bool;
}

/// Owns the applied theme and the rules for changing it.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    applied: Theme,
    explicit: Option<Theme>,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let explicit = store
            .load(THEME_STORAGE_KEY)
            .and_then(|v| Theme::from_stored(&v));
        let applied = explicit.unwrap_or(Theme::from_system(system_prefers_dark));
        Self {
            store,
            applied,
            explicit,
        }
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.explicit.is_some()
            || self
                .store
                .load(THEME_STORAGE_KEY)
                .and_then(|v| Theme::from_stored(&v))
                .is_some()
    }

    /// Follow the operating system unless the user has chosen a theme.
    /// Returns the new theme when the applied one changed.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_preference() {
            return None;
        }
        let next = Theme::from_system(prefers_dark);
        if next == self.applied {
            return None;
        }
        self.applied = next;
        Some(next)
    }

    /// Flip the applied theme and remember it as the user's choice.
    pub fn toggle(&mut self) -> Theme {
        let next = self.applied.toggled();
        self.applied = next;
        self.explicit = Some(next);
        if !self.store.store(THEME_STORAGE_KEY, next.as_str()) {
            log::debug!("[theme] preference not persisted; storage unavailable");
        }
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
