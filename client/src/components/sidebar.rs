//! Left navigation for authenticated pages.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use esg_api::Session;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// `(href, label, icon)` for each sidebar entry.
pub const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/dashboard", "Dashboard", "▦"),
    ("/tasks", "Tasks", "✓"),
    ("/leaderboard", "Leaderboard", "★"),
    ("/profile", "Profile", "☺"),
    ("/settings", "Settings", "⚙"),
];

/// Whether `href` is the current route or one of its children.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<Session>();
    let location = use_location();

    let on_logout = move |_| {
        crate::util::auth::logout(session.clone(), auth);
    };

    view! {
        <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <a class="sidebar__brand" href="/dashboard">"Verdance"</a>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label, icon)| {
                        let active = move || is_active(&location.pathname.get(), href);
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=active
                                href=href
                                on:click=move |_| ui.update(|u| u.sidebar_open = false)
                            >
                                <span class="sidebar__icon" aria-hidden="true">{icon}</span>
                                <span>{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="btn sidebar__logout" on:click=on_logout>
                "Log out"
            </button>
        </aside>
    }
}
