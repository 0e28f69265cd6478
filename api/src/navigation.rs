//! Full-page navigation seam used by the session and the 401 policy.

/// Login screen; target of every forced sign-out.
pub const LOGIN_ROUTE: &str = "/login";
/// Landing route after a successful login.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Performs a hard navigation (the browser reloads the target route).
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator for environments without pages, such as the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigation to {path} ignored");
    }
}
