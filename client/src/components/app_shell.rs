//! Layout wrapper for every authenticated page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows a spinner while the session resolves, sends anonymous visitors to
//! `/login`, and otherwise renders the sidebar + navbar chrome around the
//! page content.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let ready = move || {
        let state = auth.get();
        !state.loading && state.user.is_some()
    };

    view! {
        <Show
            when=ready
            fallback=|| {
                view! {
                    <div class="app-shell app-shell--pending">
                        <LoadingSpinner/>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <Sidebar/>
                <div class="app-shell__main">
                    <Navbar/>
                    <main class="app-shell__content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
