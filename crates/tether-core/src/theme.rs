use tracing::debug;

use crate::error::StoreError;
use crate::storage::{KeyValueStore, THEME_KEY};

pub const DARK_THEME_CLASS: &str = "dark-theme";

/// Where the current theme becomes visible: the document body class in a
/// browser, the colour palette in a terminal.
pub trait ThemeSurface {
    fn apply_theme(&mut self, dark: bool);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Only the exact string `dark` selects the dark theme.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }
}

/// Holds the dark-mode flag and keeps the surface and the `todo-theme`
/// record in step with it after every change, including the initial load.
pub struct ThemeStore<S, D> {
    storage: S,
    surface: D,
    mode: ThemeMode,
}

impl<S: KeyValueStore, D: ThemeSurface> ThemeStore<S, D> {
    /// Store in `mode` whose surface has not been touched yet.
    pub fn new(storage: S, surface: D, mode: ThemeMode) -> Self {
        Self {
            storage,
            surface,
            mode,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn load(storage: S, surface: D) -> Result<Self, StoreError> {
        let stored = storage.get_item(THEME_KEY)?;
        let mode = ThemeMode::from_storage(stored.as_deref());
        debug!(?mode, "loaded theme");

        let mut store = Self::new(storage, surface, mode);
        store.sync()?;
        Ok(store)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn toggle_theme(&mut self) -> Result<(), StoreError> {
        self.set_mode(self.mode.next())
    }

    pub fn set_dark_mode(&mut self, dark: bool) -> Result<(), StoreError> {
        self.set_mode(ThemeMode::from_dark(dark))
    }

    #[tracing::instrument(skip(self))]
    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<(), StoreError> {
        self.mode = mode;
        self.sync()
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        self.surface.apply_theme(self.mode.is_dark());
        self.storage
            .set_item(THEME_KEY, self.mode.storage_value())?;
        Ok(())
    }
}
