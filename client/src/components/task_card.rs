//! Card for one task in the dashboard and task lists.

use leptos::prelude::*;

use crate::components::category_badge::{CategoryBadge, StatusBadge};
use crate::util::format::{format_date, format_points, truncate_text};
use crate::util::mock_data::TaskEntry;

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// A task summary. `show_status` adds the viewer's participation badge;
/// `on_join` adds a join button that reports the task id.
#[component]
pub fn TaskCard(
    entry: TaskEntry,
    #[prop(optional)] show_status: bool,
    #[prop(optional)] on_join: Option<Callback<String>>,
) -> impl IntoView {
    let TaskEntry { task, participation } = entry;
    let date = task.start_date.as_deref().map(format_date).unwrap_or_default();
    let points = format!("{} pts", format_points(task.points_reward));
    let task_id = task.id.clone();

    view! {
        <article class="task-card">
            <header class="task-card__header">
                <h3 class="task-card__title">{task.title}</h3>
                <CategoryBadge category=task.category/>
            </header>
            <p class="task-card__description">{truncate_text(&task.description, DESCRIPTION_PREVIEW_CHARS)}</p>
            <footer class="task-card__footer">
                <span class="task-card__points">{points}</span>
                <span class="task-card__date">{date}</span>
                {show_status.then(|| view! { <StatusBadge status=participation/> })}
                {on_join.map(|on_join| {
                    view! {
                        <button
                            class="btn btn--primary task-card__join"
                            on:click=move |_| on_join.run(task_id.clone())
                        >
                            "Join task"
                        </button>
                    }
                })}
            </footer>
        </article>
    }
}
