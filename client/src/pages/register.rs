//! Account registration. On success the session signs the new user in.

use leptos::prelude::*;

use esg_api::{RegistrationForm, Session};

use crate::state::auth::AuthState;
use crate::util::validation::{DEPARTMENTS, FieldErrors, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let edit_session = session.clone();

    let form = RwSignal::new(RegistrationForm::default());
    let accepted_terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let mut values = form.get();
        values.username = values.username.trim().to_owned();
        values.email = values.email.trim().to_owned();
        values.full_name = values.full_name.trim().to_owned();
        let found = validate_registration(&values, accepted_terms.get());
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            crate::util::auth::register(session.clone(), auth, values);
        }
    };

    let field_error = move |field: &'static str| {
        move || errors.get().get(field).map(|msg| view! { <p class="form-error">{msg}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create an account"</h1>
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
                        <span>"Username"</span>
                        <input
                            type="text"
                            autocomplete="username"
                            prop:value=move || form.get().username
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                        {field_error("username")}
                    </label>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        {field_error("email")}
                    </label>
                    <label class="form-field">
                        <span>"Full name"</span>
                        <input
                            type="text"
                            autocomplete="name"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                        {field_error("full_name")}
                    </label>
                    <label class="form-field">
                        <span>"Department"</span>
                        <select
                            prop:value=move || form.get().department
                            on:change=move |ev| form.update(|f| f.department = event_target_value(&ev))
                        >
                            <option value="">"Select a department"</option>
                            {DEPARTMENTS
                                .into_iter()
                                .map(|name| view! { <option value=name>{name}</option> })
                                .collect_view()}
                        </select>
                        {field_error("department")}
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        {field_error("password")}
                    </label>
                    <label class="form-field">
                        <span>"Confirm password"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev));
                            }
                        />
                        {field_error("confirm_password")}
                    </label>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || accepted_terms.get()
                            on:change=move |ev| accepted_terms.set(event_target_checked(&ev))
                        />
                        <span>"I accept the terms of service and privacy policy"</span>
                    </label>
                    {field_error("terms")}
                    <button class="btn btn--primary" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
