//! # Shell State
//!
//! State owned by the navigation shell itself rather than by any feature
//! screen: which screen is showing, and the dark-mode flag that drives the
//! global theme.
//!
//! The settings screen changes dark mode through [`DarkModeControl`], so the
//! flag has a single owner even though two places render it.

use shared::ViewType;

use crate::backend::domain::DarkModeControl;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    /// Screen selected in the bottom tab bar
    pub current_view: ViewType,

    /// Global light/dark theme
    pub dark_mode: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch screens; returns true if the view actually changed
    pub fn select_view(&mut self, view: ViewType) -> bool {
        if self.current_view == view {
            return false;
        }
        log::info!("🧭 Switching view: {} -> {}", self.current_view, view);
        self.current_view = view;
        true
    }
}

impl DarkModeControl for ShellState {
    fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }
}
