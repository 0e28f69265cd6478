//! Session store: who is logged in, plus the login/register/logout flows.
//!
//! LIFECYCLE
//! =========
//! A `Session` starts in the loading state. The host runs [`Session::load_user`]
//! once at startup, which resolves to either a user or "not logged in". Every
//! failure collapses into "not logged in"; the only durable state is the
//! bearer token behind the client's [`crate::TokenStore`].
//!
//! Calls are expected to come from one place at a time. Concurrent calls are
//! safe but the last write to the user wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, RwLock};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::navigation::DASHBOARD_ROUTE;
use crate::types::{RegisterRequest, RegistrationForm, User};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check your email and password.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Check the information you entered.";
pub const LOAD_USER_FAILED_MESSAGE: &str = "Failed to load user.";

/// Observable session fields, cloned out for UI binding.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    client: ApiClient,
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client, state: Arc::new(RwLock::new(SessionState::default())) }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.read(Clone::clone)
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read(|s| s.user.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(|s| s.user.is_some())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|s| s.loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read(|s| s.error.clone())
    }

    /// Clear a displayed error, e.g. when a form is edited.
    pub fn clear_error(&self) {
        self.write(|s| s.error = None);
    }

    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        match self.state.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        match self.state.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    // -------------------------------------------------------------------------
    // Flows
    // -------------------------------------------------------------------------

    /// Startup bootstrap. Without a stored token this finishes immediately;
    /// otherwise it fetches the current user, and any failure discards the
    /// token.
    pub async fn load_user(&self) {
        self.write(|s| s.loading = true);

        if self.client.token().is_none() {
            self.write(|s| {
                s.user = None;
                s.loading = false;
            });
            return;
        }

        match self.client.auth().current_user().await {
            Ok(user) => self.write(|s| {
                s.user = Some(user);
                s.error = None;
                s.loading = false;
            }),
            Err(e) => {
                log::warn!("failed to load user: {e}");
                self.client.clear_token();
                self.write(|s| {
                    s.user = None;
                    s.error = Some(LOAD_USER_FAILED_MESSAGE.to_owned());
                    s.loading = false;
                });
            }
        }
    }

    /// Exchange credentials for a token, adopt the user, and navigate to the
    /// dashboard.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the failing call; the session error holds
    /// its display message.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.write(|s| {
            s.loading = true;
            s.error = None;
        });

        match self.authenticate(email, password).await {
            Ok(user) => {
                self.write(|s| {
                    s.user = Some(user.clone());
                    s.loading = false;
                });
                self.client.navigate(DASHBOARD_ROUTE);
                Ok(user)
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.fail(&e, LOGIN_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self.client.auth().login(email, password).await?;
        self.client.store_token(&response.access_token);
        if let Some(user) = response.user {
            return Ok(user);
        }
        match self.client.auth().current_user().await {
            Ok(user) => Ok(user),
            Err(e) => {
                self.client.clear_token();
                Err(e)
            }
        }
    }

    /// Create an account, then log in with the same credentials. The
    /// confirmation password never leaves this function.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the registration or the follow-up login.
    pub async fn register(&self, form: RegistrationForm) -> Result<User, ApiError> {
        self.write(|s| {
            s.loading = true;
            s.error = None;
        });

        let request = RegisterRequest::from(form);
        if let Err(e) = self.client.auth().register(&request).await {
            log::warn!("registration failed: {e}");
            self.fail(&e, REGISTER_FAILED_MESSAGE);
            return Err(e);
        }

        self.login(&request.email, &request.password).await.inspect_err(|e| {
            self.fail(e, REGISTER_FAILED_MESSAGE);
        })
    }

    /// Best-effort server logout, then drop local state and return to the
    /// login page. Never fails.
    pub async fn logout(&self) {
        self.write(|s| s.loading = true);
        if let Err(e) = self.client.auth().logout().await {
            log::debug!("logout request failed: {e}");
        }
        self.write(|s| {
            s.user = None;
            s.loading = false;
        });
        self.client.end_session();
    }

    fn fail(&self, error: &ApiError, fallback: &str) {
        let message = error.user_message(fallback);
        self.write(|s| {
            s.error = Some(message);
            s.loading = false;
        });
    }
}
