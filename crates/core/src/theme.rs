//! Light/dark theme preference, persisted under [`THEME_KEY`] and kept in
//! sync across views that share the same store.
//!
//! The grid does not depend on the theme; this only decides page chrome.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::error::ParseError;
use crate::palette::Color;

pub const THEME_KEY: &str = "preference-theme";

/// Class present on the root element while a theme transition animates.
pub const THEME_CHANGE_ACTIVE: &str = "theme-change-active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color::hex(0x282828),
            Theme::Light => Color::hex(0xf9f5d7),
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }

    /// Parse a stored value; anything unrecognised (or absent) is `Dark`.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ParseError::Theme(s.to_string())),
        }
    }
}

/// String key/value store holding preferences.
pub trait PreferenceStore {
    type Error;

    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Infallible> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn theme_from_store<P: PreferenceStore + ?Sized>(store: &P) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

/// Why a theme is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Initial load from the store.
    Startup,
    /// The user pressed a theme button in this view.
    User,
    /// Another view wrote the store.
    Sync,
}

/// What the view has to do for one theme application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: Theme,
    pub previous: Theme,
    /// Play the transition animation.
    pub animate: bool,
    /// Write the theme back to the store.
    pub persist: bool,
}

impl ThemeChange {
    pub fn changed(&self) -> bool {
        self.theme != self.previous
    }

    pub fn commit<P: PreferenceStore + ?Sized>(&self, store: &mut P) -> Result<(), P::Error> {
        if self.persist {
            store.set(THEME_KEY, self.theme.as_attr())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    /// Read the stored preference and produce the startup application.
    pub fn initialize<P: PreferenceStore + ?Sized>(store: &P) -> (Self, ThemeChange) {
        let mut state = Self::default();
        let change = state.apply(theme_from_store(store), ChangeOrigin::Startup);
        (state, change)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn apply(&mut self, theme: Theme, origin: ChangeOrigin) -> ThemeChange {
        let previous = self.current;
        self.current = theme;
        ThemeChange {
            theme,
            previous,
            animate: origin == ChangeOrigin::User && theme != previous,
            persist: origin != ChangeOrigin::Sync,
        }
    }

    pub fn toggle(&mut self) -> ThemeChange {
        self.apply(self.current.toggle(), ChangeOrigin::User)
    }

    /// Handle a change notification from another view. Other keys are ignored;
    /// a removed or unknown value falls back to `Dark`.
    pub fn on_storage_event(
        &mut self,
        key: Option<&str>,
        new_value: Option<&str>,
    ) -> Option<ThemeChange> {
        if key != Some(THEME_KEY) {
            return None;
        }
        Some(self.apply(Theme::from_stored(new_value), ChangeOrigin::Sync))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_unknown_preference_is_dark() {
        let mut store = MemoryStore::new();
        assert_eq!(theme_from_store(&store), Theme::Dark);

        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(theme_from_store(&store), Theme::Dark);

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(theme_from_store(&store), Theme::Light);
    }

    #[test]
    fn startup_persists_without_animating() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();

        let (state, change) = ThemeState::initialize(&store);
        assert_eq!(state.current(), Theme::Light);
        assert!(!change.animate);
        assert!(change.persist);

        let mut empty = MemoryStore::new();
        let (_, change) = ThemeState::initialize(&empty);
        change.commit(&mut empty).unwrap();
        assert_eq!(empty.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn user_toggle_animates_and_persists() {
        let mut store = MemoryStore::new();
        let (mut state, _) = ThemeState::initialize(&store);

        let change = state.toggle();
        assert_eq!(change.theme, Theme::Light);
        assert_eq!(change.previous, Theme::Dark);
        assert!(change.animate && change.persist && change.changed());
        change.commit(&mut store).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        // Pressing the already-active theme does not animate.
        let change = state.apply(Theme::Light, ChangeOrigin::User);
        assert!(!change.animate);
        assert!(!change.changed());
    }

    #[test]
    fn storage_events_sync_without_writing_back() {
        let mut state = ThemeState::default();

        assert_eq!(state.on_storage_event(Some("other-key"), Some("light")), None);
        assert_eq!(state.on_storage_event(None, None), None);
        assert_eq!(state.current(), Theme::Dark);

        let change = state
            .on_storage_event(Some(THEME_KEY), Some("light"))
            .expect("theme key is handled");
        assert_eq!(state.current(), Theme::Light);
        assert!(!change.animate);
        assert!(!change.persist);

        let mut store = MemoryStore::new();
        change.commit(&mut store).unwrap();
        assert_eq!(store.get(THEME_KEY), None);

        // Cleared key falls back to dark.
        let change = state.on_storage_event(Some(THEME_KEY), None).unwrap();
        assert_eq!(change.theme, Theme::Dark);
    }

    #[test]
    fn theme_names() {
        for &t in Theme::all() {
            assert_eq!(t.as_attr().parse::<Theme>(), Ok(t));
            assert_eq!(t.toggle().toggle(), t);
            assert!(t.class_name().ends_with(t.as_attr()));
            assert!(!t.icon().is_empty());
        }
        assert_ne!(Theme::Dark.background(), Theme::Light.background());
    }
}
