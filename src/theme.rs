//! Light/dark theme
//!
//! The theme is a two-valued flag. It is initialized once at load time from
//! the stored preference, falling back to the system preference and then to
//! dark. Afterwards only [`ThemeController::toggle`] and
//! [`ThemeController::set`] change it, and every change is written back to
//! the store.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::content::{ContentError, ContentResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Toggle button glyph
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Pick the load-time theme.
    ///
    /// A valid stored value wins, then the system preference, then dark.
    pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
        if let Some(theme) = stored.and_then(|s| s.parse().ok()) {
            return theme;
        }
        match system_prefers_dark {
            Some(true) => Theme::Dark,
            Some(false) => Theme::Light,
            None => Theme::default(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ContentError::Preference(format!("unknown theme '{}'", other))),
        }
    }
}

/// Where the theme preference lives between visits
pub trait PreferenceStore {
    /// Raw stored value, if any
    fn load(&self) -> Option<String>;

    /// Persist a theme
    fn save(&self, theme: Theme) -> ContentResult<()>;
}

/// In-memory store, used by tests and when no persistent storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, theme: Theme) -> ContentResult<()> {
        *self.value.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}

/// Owner of the current theme
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Initialize from the store and the system preference
    pub fn load(store: S, system_prefers_dark: Option<bool>) -> Self {
        let stored = store.load();
        let theme = Theme::resolve_initial(stored.as_deref(), system_prefers_dark);
        tracing::debug!(?stored, %theme, "Theme initialized");
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it. A failed write is logged; the
    /// in-memory theme still changes.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggle())
    }

    /// Set the theme explicitly and persist it
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        if let Err(e) = self.store.save(theme) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Preference file contents
#[cfg(feature = "server")]
#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    theme: Theme,
}

/// JSON preference file in the user config directory
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "server")]
impl FilePreferenceStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/garfield-vibes/preferences.json`
    pub fn default_path() -> std::path::PathBuf {
        dirs::config_dir()
            .map(|p| p.join("garfield-vibes"))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("preferences.json")
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "server")]
impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[cfg(feature = "server")]
impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<PreferenceFile>(&content) {
            Ok(file) => Some(file.theme.as_str().to_string()),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Ignoring unreadable preference file");
                None
            }
        }
    }

    fn save(&self, theme: Theme) -> ContentResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ContentError::Preference(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&PreferenceFile { theme })
            .map_err(|e| ContentError::Preference(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| ContentError::Preference(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involutive() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(" DARK ".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.icon(), "🌙");
    }

    #[test]
    fn test_resolve_initial() {
        assert_eq!(Theme::resolve_initial(Some("light"), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve_initial(Some("garbage"), Some(false)), Theme::Light);
        assert_eq!(Theme::resolve_initial(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve_initial(None, None), Theme::Dark);
    }

    #[test]
    fn test_controller_persists_toggles() {
        let mut controller = ThemeController::load(MemoryStore::new(), Some(false));
        assert_eq!(controller.theme(), Theme::Light);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().load().as_deref(), Some("dark"));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn test_controller_prefers_stored_value() {
        let controller = ThemeController::load(MemoryStore::with_value("light"), Some(true));
        assert_eq!(controller.theme(), Theme::Light);
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _theme: Theme) -> ContentResult<()> {
            Err(ContentError::Preference("read-only".to_string()))
        }
    }

    #[test]
    fn test_controller_survives_failed_save() {
        let mut controller = ThemeController::load(FailingStore, None);
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("nested").join("prefs.json"));
        assert_eq!(store.load(), None);

        let mut controller = ThemeController::load(store, Some(true));
        controller.toggle();

        let reopened = ThemeController::load(
            FilePreferenceStore::new(dir.path().join("nested").join("prefs.json")),
            Some(true),
        );
        assert_eq!(reopened.theme(), Theme::Light);
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(FilePreferenceStore::new(&path).load(), None);
    }
}
