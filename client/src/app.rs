//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, leaderboard::LeaderboardPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, settings::SettingsPage, tasks::TasksPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the per-tab session, provides it alongside the auth and UI
/// signals, and starts the one-time user load before routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = crate::net::browser_session();
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session.clone());
    provide_context(auth);
    provide_context(ui);

    crate::util::auth::load_user(session, auth);

    // Keep `data-theme` in sync with the chosen theme.
    Effect::new(move || crate::util::dark_mode::apply(ui.get().theme));

    view! {
        <Stylesheet id="leptos" href="/pkg/verdance.css"/>
        <Title text="Verdance"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
                <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
