#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

/// Body class present while the light theme is active.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Site color theme. Dark is the stylesheet default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored preference. Anything but the two literals is treated as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Initial theme: stored preference, then OS preference, then dark.
    pub fn resolve(stored: Option<&str>, system: Option<Self>) -> Self {
        stored.and_then(Self::parse).or(system).unwrap_or_default()
    }

    pub fn view(self) -> ThemeView {
        match self {
            Self::Dark => ThemeView {
                body_light_class: false,
                desktop_icon_class: "fas fa-moon",
                mobile_icon_class: "fas fa-moon theme-icon",
                mobile_label: "Switch to Light Mode",
            },
            Self::Light => ThemeView {
                body_light_class: true,
                desktop_icon_class: "fas fa-sun",
                mobile_icon_class: "fas fa-sun theme-icon",
                mobile_label: "Switch to Dark Mode",
            },
        }
    }
}

/// Everything on the page that depends on the active theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub body_light_class: bool,
    pub desktop_icon_class: &'static str,
    pub mobile_icon_class: &'static str,
    pub mobile_label: &'static str,
}

/// Current theme plus where it is persisted.
pub struct ThemeController<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the initial theme from `store` and the OS preference.
    pub fn new(store: S, key: &str, system: Option<Theme>) -> Self {
        let stored = store.get(key);
        let theme = Theme::resolve(stored.as_deref(), system);
        log::debug!("theme resolved to {} (stored={stored:?}, system={system:?})", theme.as_str());
        Self {
            store,
            key: key.to_owned(),
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take `theme` as current without persisting it.
    pub fn adopt(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(&self.key, self.theme.as_str());
        self.theme
    }
}
