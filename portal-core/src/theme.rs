use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

pub const MOON_ICON: &str = "🌙";
pub const SUN_ICON: &str = "☀️";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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

    /// Exact, case-sensitive match. Anything else is not a theme.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
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

    /// Indicator glyph shown in the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => SUN_ICON,
            Theme::Dark => MOON_ICON,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| UiError::InvalidTheme(s.to_string()))
    }
}

// ============================================================================
// Seams
// ============================================================================

/// Key-value persistence for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, value: &str) -> Result<()>;
}

/// Where the applied theme becomes visible.
pub trait ThemeView {
    fn set_dark(&self, dark: bool);
    fn set_icon(&self, glyph: &str);
}

// ============================================================================
// Controller
// ============================================================================

/// Owns the applied theme for one page.
pub struct ThemeController<S, V> {
    store: S,
    view: V,
    current: Theme,
}

impl<S: ThemeStore, V: ThemeView> ThemeController<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self {
            store,
            view,
            current: Theme::default(),
        }
    }

    /// Reads the stored preference and applies it, or light when the value
    /// is missing, invalid or unreadable.
    pub fn init(&mut self) -> Theme {
        let stored = match self.store.load() {
            Ok(value) => value,
            Err(e) => {
                log::debug!("theme preference unreadable, using default: {e}");
                None
            }
        };

        let theme = stored.as_deref().and_then(Theme::parse).unwrap_or_default();
        self.apply(theme);
        theme
    }

    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.view.set_dark(theme.is_dark());
        self.view.set_icon(theme.icon());

        if let Err(e) = self.store.save(theme.as_str()) {
            log::debug!("theme preference not persisted: {e}");
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        next
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingView {
        dark: Cell<bool>,
        icon: RefCell<String>,
    }

    impl ThemeView for RecordingView {
        fn set_dark(&self, dark: bool) {
            self.dark.set(dark);
        }

        fn set_icon(&self, glyph: &str) {
            *self.icon.borrow_mut() = glyph.to_string();
        }
    }

    struct BlockedStore;

    impl ThemeStore for BlockedStore {
        fn load(&self) -> Result<Option<String>> {
            Err(UiError::StorageUnavailable("blocked".into()))
        }

        fn save(&self, _value: &str) -> Result<()> {
            Err(UiError::Storage("quota".into()))
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(" dark"), None);
        assert!("blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_no_stored_preference_applies_light() {
        let mut controller = ThemeController::new(MemoryStore::new(), RecordingView::default());
        assert_eq!(controller.init(), Theme::Light);
        assert!(!controller.view().dark.get());
        assert_eq!(*controller.view().icon.borrow(), SUN_ICON);
        assert_eq!(controller.store().get().as_deref(), Some("light"));
    }

    #[test]
    fn test_stored_dark_applies_moon() {
        let mut controller =
            ThemeController::new(MemoryStore::with_value("dark"), RecordingView::default());
        assert_eq!(controller.init(), Theme::Dark);
        assert!(controller.view().dark.get());
        assert_eq!(*controller.view().icon.borrow(), MOON_ICON);
    }

    #[test]
    fn test_invalid_stored_values_fall_back_to_light() {
        for raw in ["Dark", "blue", ""] {
            let mut controller =
                ThemeController::new(MemoryStore::with_value(raw), RecordingView::default());
            assert_eq!(controller.init(), Theme::Light, "stored {raw:?}");
            assert_eq!(controller.store().get().as_deref(), Some("light"));
        }
    }

    #[test]
    fn test_toggle_twice_restores_theme_and_storage() {
        let mut controller =
            ThemeController::new(MemoryStore::with_value("dark"), RecordingView::default());
        controller.init();

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store().get().as_deref(), Some("light"));
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().get().as_deref(), Some("dark"));
        assert!(controller.view().dark.get());
    }

    #[test]
    fn test_blocked_storage_still_themes_the_page() {
        let mut controller = ThemeController::new(BlockedStore, RecordingView::default());
        assert_eq!(controller.init(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert!(controller.view().dark.get());
        assert_eq!(*controller.view().icon.borrow(), MOON_ICON);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
