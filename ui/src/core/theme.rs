//! Light/dark theme state.
//!
//! The preference is read once when the root view mounts (stored value
//! first, platform color-scheme hint second) and written back on every
//! toggle. The resolved theme reaches rendering surfaces through
//! [`ThemeContext`] instead of a class stamped onto the global document.

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::platform::{self, Platform};
use super::storage::{self, PreferenceStore, StorageError};

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

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

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
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

    /// Dark-mode marker class for the root container (empty for light).
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// Dark only when the stored value says so, or when nothing is stored and
/// the platform prefers dark. Unknown stored strings count as light.
pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved {
        Some(value) if Theme::parse(value) == Some(Theme::Dark) => Theme::Dark,
        Some(_) => Theme::Light,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Persistent,
    /// Storage failed once; the theme lives in memory until reload.
    SessionOnly,
}

pub struct ThemeController {
    theme: Theme,
    store: Box<dyn PreferenceStore>,
    persistence: Persistence,
}

impl ThemeController {
    pub fn init(store: Box<dyn PreferenceStore>, prefers_dark: bool) -> Self {
        let (saved, persistence) = match store.get(THEME_KEY) {
            Ok(saved) => (saved, Persistence::Persistent),
            // Next toggle overwrites the bad data.
            Err(err @ StorageError::Corrupt { .. }) => {
                warn!(error = %err, backend = store.backend(), "ignoring malformed theme preference");
                (None, Persistence::Persistent)
            }
            Err(err) => {
                warn!(error = %err, backend = store.backend(), "theme preference unreadable");
                (None, Persistence::SessionOnly)
            }
        };

        let theme = resolve(saved.as_deref(), prefers_dark);
        info!(
            theme = theme.as_str(),
            stored = saved.as_deref().unwrap_or("<none>"),
            prefers_dark,
            platform = Platform::current().as_str(),
            "theme initialised"
        );

        Self {
            theme,
            store,
            persistence,
        }
    }

    /// Platform store and color-scheme hint.
    pub fn from_platform() -> Self {
        Self::init(storage::default_store(), platform::prefers_dark_scheme())
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Flip the theme and persist the new literal. A failed write keeps the
    /// flipped theme and stops further writes for the session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();

        if self.persistence == Persistence::Persistent {
            if let Err(err) = self.store.set(THEME_KEY, self.theme.as_str()) {
                warn!(error = %err, backend = self.store.backend(), "theme kept for session only");
                self.persistence = Persistence::SessionOnly;
            }
        }

        debug!(theme = self.theme.as_str(), "theme toggled");
        self.theme
    }
}

/// Handle to the theme state shared through Dioxus context.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    controller: Signal<ThemeController>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.controller.read().theme()
    }

    pub fn toggle(&self) -> Theme {
        let mut controller = self.controller;
        let theme = controller.write().toggle();
        theme
    }
}

/// Initialise the theme once for this scope and provide it to descendants.
pub fn use_theme_provider() -> ThemeContext {
    let controller = use_signal(ThemeController::from_platform);
    use_context_provider(|| ThemeContext { controller })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
