//! Light/dark theme preference
//!
//! The preference lives under [`THEME_STORAGE_KEY`] in whatever
//! [`KeyValueStore`] the caller hands in. Only the exact stored value
//! `"dark"` selects the dark theme; anything else, or nothing, is light.

use std::fmt;
use std::str::FromStr;

use crate::data::constants::THEME_STORAGE_KEY;
use crate::utils::error::{KaengError, KaengResult};
use crate::utils::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button: what clicking it switches to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
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

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = KaengError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(KaengError::invalid(format!("unknown theme '{}'", other))),
        }
    }
}

/// Theme state backed by a store
pub struct ThemeManager<S: KeyValueStore> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeManager<S> {
    /// Load the saved preference from `store`
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_STORAGE_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        };
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it
    pub fn toggle(&mut self) -> KaengResult<Theme> {
        let next = self.theme.toggled();
        self.set_dark_mode(next.is_dark())?;
        Ok(next)
    }

    pub fn set_dark_mode(&mut self, is_dark: bool) -> KaengResult<()> {
        self.set_theme(if is_dark { Theme::Dark } else { Theme::Light })
    }

    pub fn set_theme(&mut self, theme: Theme) -> KaengResult<()> {
        self.theme = theme;
        self.store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn test_default_light() {
        let manager = ThemeManager::load(MemoryStore::new());
        assert_eq!(manager.theme(), Theme::Light);
        assert_eq!(manager.theme().toggle_icon(), "🌙");
    }

    #[test]
    fn test_only_exact_dark_is_dark() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "Dark").unwrap();
        assert_eq!(ThemeManager::load(store).theme(), Theme::Light);

        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(ThemeManager::load(store).theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut manager = ThemeManager::load(MemoryStore::new());
        assert_eq!(manager.toggle().unwrap(), Theme::Dark);
        assert_eq!(manager.store().get(THEME_STORAGE_KEY), Some("dark".to_string()));
        assert_eq!(manager.theme().toggle_icon(), "☀️");

        assert_eq!(manager.toggle().unwrap(), Theme::Light);
        let store = manager.into_store();
        assert_eq!(store.get(THEME_STORAGE_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
