//! Browse available tasks. Joining is not wired to the API yet.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::task_card::TaskCard;
use crate::util::mock_data::{self, MOCK_LATENCY, TaskEntry};
use crate::util::timer;

#[component]
pub fn TasksPage() -> impl IntoView {
    let loading = RwSignal::new(true);
    let entries = RwSignal::new(Vec::<TaskEntry>::new());

    timer::after(MOCK_LATENCY, move || {
        entries.set(mock_data::tasks());
        loading.set(false);
    });

    let on_join = Callback::new(|task_id: String| {
        leptos::logging::log!("join requested for task {task_id}");
    });

    view! {
        <AppShell>
            <div class="tasks-page">
                <h1 class="page-title">"Tasks"</h1>
                <p class="page-subtitle">"Pick up a task to earn ESG points."</p>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    <div class="task-grid">
                        <For
                            each=move || entries.get()
                            key=|entry| entry.task.id.clone()
                            children=move |entry| view! { <TaskCard entry=entry on_join=on_join/> }
                        />
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}
