//! Dashboard statistic tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(title: &'static str, value: String, icon: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
            <div class="stat-card__body">
                <p class="stat-card__title">{title}</p>
                <p class="stat-card__value">{value}</p>
            </div>
        </div>
    }
}
