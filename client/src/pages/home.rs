//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Verdance"</h1>
                <p class="home-hero__tagline">
                    "Earn points for environmental, social and governance actions at work."
                </p>
                <div class="home-hero__actions">
                    <a href="/login" class="btn btn--primary">"Sign in"</a>
                    <a href="/register" class="btn">"Create an account"</a>
                </div>
            </section>
        </div>
    }
}
