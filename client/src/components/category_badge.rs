//! Pill badges for task category and participation status.
//!
//! The CSS modifier is the wire name (`badge--environmental`,
//! `badge--participating`), so styling tracks the API vocabulary.

use esg_api::{ParticipationStatus, TaskCategory};
use leptos::prelude::*;

#[component]
pub fn CategoryBadge(category: TaskCategory) -> impl IntoView {
    let class = format!("badge badge--{}", category.as_str());
    view! { <span class=class>{category.label()}</span> }
}

#[component]
pub fn StatusBadge(status: ParticipationStatus) -> impl IntoView {
    let class = format!("badge badge--{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}
