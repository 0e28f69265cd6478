//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of [`esg_api::Session`]. The session owns the flows and
//! the token; after each flow step the app copies its snapshot into this
//! struct so route guards and user-aware components re-render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use esg_api::{SessionState, User};

/// Authentication state tracking the current user, loading status and the
/// last displayable error.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    /// Starts loading: nothing is known until the startup user load resolves.
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl From<SessionState> for AuthState {
    fn from(state: SessionState) -> Self {
        Self { user: state.user, loading: state.loading, error: state.error }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in the navbar, falling back to a neutral label.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "Guest".to_owned(), |user| user.display_name().to_owned())
    }

    #[must_use]
    pub fn points(&self) -> i64 {
        self.user.as_ref().map_or(0, |user| user.points_total)
    }
}
