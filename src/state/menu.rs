//! Mobile overlay menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class toggled on the menu panel and overlay while open.
pub const OPEN_CLASS: &str = "open";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that drive the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Hamburger,
    CloseButton,
    Overlay,
    NavLink,
}

impl MenuState {
    /// Next state after `event`. Opening an open menu stays open.
    #[must_use]
    pub fn on(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Hamburger => Self::Open,
            MenuEvent::CloseButton | MenuEvent::Overlay | MenuEvent::NavLink => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn view(self) -> MenuView {
        match self {
            Self::Closed => MenuView {
                panel_open: false,
                overlay_open: false,
                body_overflow: "",
            },
            Self::Open => MenuView {
                panel_open: true,
                overlay_open: true,
                body_overflow: "hidden",
            },
        }
    }
}

/// DOM-facing projection of [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub panel_open: bool,
    pub overlay_open: bool,
    /// Inline `overflow` for `<body>`; empty restores the stylesheet value.
    pub body_overflow: &'static str,
}
