//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use esg_api::Session;

use crate::state::auth::AuthState;
use crate::util::validation::{FieldErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let edit_session = session.clone();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    // Already signed in: skip the form.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate(esg_api::DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let found = validate_login(&email_value, &password_value);
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            crate::util::auth::login(session.clone(), auth, email_value, password_value);
        }
    };

    let field_error = move |field: &'static str| {
        move || errors.get().get(field).map(|msg| view! { <p class="form-error">{msg}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Welcome back to Verdance"</p>
                <Show when=move || auth.get().error.is_some()>
                    <p class="auth-message auth-message--error">
                        {move || auth.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <form
                    class="auth-form"
                    novalidate=true
                    on:submit=on_submit
                    on:input=move |_| crate::util::auth::clear_error(&edit_session, auth)
                >
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {field_error("email")}
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {field_error("password")}
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
