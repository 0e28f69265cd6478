//! Authenticated landing page: headline stats and the user's current tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Task data is mocked; it appears after [`MOCK_LATENCY`] to mirror a real
//! fetch. Total points come from the session user when they have any.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::stat_card::StatCard;
use crate::components::task_card::TaskCard;
use crate::state::auth::AuthState;
use crate::util::format::format_points;
use crate::util::mock_data::{self, MOCK_LATENCY, TaskEntry};
use crate::util::timer;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let loading = RwSignal::new(true);
    let entries = RwSignal::new(Vec::<TaskEntry>::new());

    timer::after(MOCK_LATENCY, move || {
        entries.set(mock_data::tasks());
        loading.set(false);
    });

    let stats = Memo::new(move |_| mock_data::dashboard_stats(auth.get().user.as_ref()));

    view! {
        <AppShell>
            <div class="dashboard-page">
                <h1 class="page-title">
                    {move || format!("Welcome back, {}", auth.get().display_name())}
                </h1>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    <section class="stat-grid">
                        <StatCard
                            title="Total points"
                            value=format_points(stats.get().total_points)
                            icon="★"
                        />
                        <StatCard
                            title="Completed tasks"
                            value=stats.get().completed_tasks.to_string()
                            icon="✓"
                        />
                        <StatCard
                            title="Department rank"
                            value=format!("#{}", stats.get().department_rank)
                            icon="▲"
                        />
                        <StatCard
                            title="Points this month"
                            value=format_points(stats.get().points_this_month)
                            icon="◆"
                        />
                    </section>
                    <section class="dashboard-tasks">
                        <div class="section-header">
                            <h2>"My tasks"</h2>
                            <a href="/tasks" class="btn btn--link">"Browse all tasks"</a>
                        </div>
                        <div class="task-list">
                            <For
                                each=move || entries.get()
                                key=|entry| entry.task.id.clone()
                                children=|entry| view! { <TaskCard entry=entry show_status=true/> }
                            />
                        </div>
                    </section>
                </Show>
            </div>
        </AppShell>
    }
}
