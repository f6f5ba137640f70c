//! Light/dark theme flag, persisted as a single string.

pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Key-value store holding the theme flag (localStorage on the web).
pub trait ThemeStore {
    fn read(&self) -> Option<String>;
    fn write(&mut self, value: &str);
}

/// Saved theme, or light when nothing valid is stored.
pub fn load_theme<S: ThemeStore>(store: &S) -> Theme {
    store
        .read()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Flip and persist; returns the new theme.
pub fn toggle_theme<S: ThemeStore>(current: Theme, store: &mut S) -> Theme {
    let next = current.toggled();
    store.write(next.as_str());
    next
}
