//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior, and
//! every session flow (`load_user`, `login`, `register`, `logout`) runs the
//! same way: mark the mirror busy, run the flow on the `esg-api` session in
//! a local task, then copy the session snapshot back into the signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use esg_api::{RegistrationForm, Session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once loading has finished without a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(esg_api::LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Copy the session's observable state into the reactive mirror.
pub fn sync(auth: RwSignal<AuthState>, session: &Session) {
    auth.set(AuthState::from(session.snapshot()));
}

/// Mark a flow as started: busy, previous error cleared.
pub fn begin(state: &mut AuthState) {
    state.loading = true;
    state.error = None;
}

/// Drop a shown session error once the user edits the form again.
pub fn clear_error(session: &Session, auth: RwSignal<AuthState>) {
    if auth.with_untracked(|state| state.error.is_none()) {
        return;
    }
    session.clear_error();
    auth.update(|state| state.error = None);
}

/// Startup bootstrap; runs once from the app root.
pub fn load_user(session: Session, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.load_user().await;
        sync(auth, &session);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, auth);
    }
}

pub fn login(session: Session, auth: RwSignal<AuthState>, email: String, password: String) {
    auth.update(begin);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = session.login(&email, &password).await {
            log::warn!("login rejected: {e}");
        }
        sync(auth, &session);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, email, password);
    }
}

pub fn register(session: Session, auth: RwSignal<AuthState>, form: RegistrationForm) {
    auth.update(begin);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = session.register(form).await {
            log::warn!("registration rejected: {e}");
        }
        sync(auth, &session);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, form);
    }
}

pub fn logout(session: Session, auth: RwSignal<AuthState>) {
    auth.update(|a| a.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.logout().await;
        sync(auth, &session);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
