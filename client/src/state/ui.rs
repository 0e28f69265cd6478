//! Local UI chrome state (sidebar visibility, active theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the auth state so layout
//! controls can evolve independently of session data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode::ThemePreference;

/// UI state for the app shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Sidebar drawer open on narrow screens. Always shown on wide screens.
    pub sidebar_open: bool,
    pub theme: ThemePreference,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
