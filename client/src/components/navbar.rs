//! Top bar with the sidebar toggle and the signed-in user's summary.

use esg_api::User;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::format::format_points;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let initial = move || auth.get().user.as_ref().map_or_else(|| "U".to_owned(), User::initial);
    let points = move || format!("{} pts", format_points(auth.get().points()));

    view! {
        <header class="navbar">
            <button
                class="btn navbar__menu"
                title="Toggle navigation"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <span class="navbar__spacer"></span>
            <span class="navbar__points">{points}</span>
            <span class="navbar__user">
                <span class="navbar__avatar" aria-hidden="true">{initial}</span>
                <span class="navbar__name">{move || auth.get().display_name()}</span>
            </span>
        </header>
    }
}
