//! Points ranking, company-wide or within the viewer's department.

use leptos::prelude::*;

use esg_api::LeaderboardUser;

use crate::components::app_shell::AppShell;
use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::AuthState;
use crate::util::format::format_points;
use crate::util::mock_data::{self, LeaderboardFilter, MOCK_LATENCY};
use crate::util::timer;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let loading = RwSignal::new(true);
    let rows = RwSignal::new(Vec::<LeaderboardUser>::new());
    let filter = RwSignal::new(LeaderboardFilter::All);

    timer::after(MOCK_LATENCY, move || {
        rows.set(mock_data::leaderboard());
        loading.set(false);
    });

    let visible = Memo::new(move |_| {
        let state = auth.get();
        mock_data::filter_leaderboard(&rows.get(), filter.get(), state.user.as_ref())
    });
    let viewer_id = move || auth.get().user.map(|u| u.id).unwrap_or_default();

    let tab = move |value: LeaderboardFilter, label: &'static str| {
        view! {
            <button
                class="tab"
                class:tab--active=move || filter.get() == value
                on:click=move |_| filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <AppShell>
            <div class="leaderboard-page">
                <h1 class="page-title">"Leaderboard"</h1>
                <div class="tabs">
                    {tab(LeaderboardFilter::All, "All")}
                    {tab(LeaderboardFilter::MyDepartment, "My department")}
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! { <p class="empty-state">"No colleagues to show yet."</p> }
                    >
                        <table class="leaderboard">
                            <thead>
                                <tr>
                                    <th>"Rank"</th>
                                    <th>"Name"</th>
                                    <th>"Department"</th>
                                    <th class="leaderboard__points">"Points"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let me = viewer_id();
                                    visible
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, row)| {
                                            let is_me = !me.is_empty() && row.id == me;
                                            view! {
                                                <tr class:leaderboard__row--me=is_me>
                                                    <td>{index + 1}</td>
                                                    <td>{row.full_name}</td>
                                                    <td>{row.department}</td>
                                                    <td class="leaderboard__points">
                                                        {format_points(row.points)}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </div>
        </AppShell>
    }
}
