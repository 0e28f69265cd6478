//! Spinner shown while the session or mocked page data loads.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="spinner__ring" aria-hidden="true"></span>
            <span class="spinner__label">{label.unwrap_or("Loading...")}</span>
        </div>
    }
}
