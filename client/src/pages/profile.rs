//! Profile details and an edit form.
//!
//! Saving is simulated with [`SAVE_LATENCY`]; the session user is not
//! modified.

use std::time::Duration;

use leptos::prelude::*;

use esg_api::User;

use crate::components::app_shell::AppShell;
use crate::state::auth::AuthState;
use crate::util::format::{format_date, format_points};
use crate::util::timer;
use crate::util::validation::DEPARTMENTS;

pub const SAVE_LATENCY: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProfileDraft {
    username: String,
    full_name: String,
    email: String,
    department: String,
}

impl From<&User> for ProfileDraft {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            full_name: user.full_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            department: user.department.clone().unwrap_or_default(),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = RwSignal::new(ProfileDraft::default());
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<&'static str>);

    let start_edit = move |_| {
        if let Some(user) = auth.get_untracked().user.as_ref() {
            draft.set(ProfileDraft::from(user));
        }
        notice.set(None);
        editing.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        leptos::logging::log!("profile update requested: {:?}", draft.get_untracked());
        timer::after(SAVE_LATENCY, move || {
            saving.set(false);
            editing.set(false);
            notice.set(Some("Profile updated"));
        });
    };

    let detail = move |label: &'static str, value: String| {
        view! {
            <div class="profile-detail">
                <dt>{label}</dt>
                <dd>{if value.is_empty() { "Not set".to_owned() } else { value }}</dd>
            </div>
        }
    };

    view! {
        <AppShell>
            <div class="profile-page">
                <h1 class="page-title">"Profile"</h1>
                {move || notice.get().map(|msg| view! { <p class="notice notice--success">{msg}</p> })}
                {move || {
                    let user = auth.get().user.unwrap_or_default();
                    view! {
                        <section class="profile-card">
                            <div class="profile-card__avatar" aria-hidden="true">{user.initial()}</div>
                            <div class="profile-card__summary">
                                <h2>{user.display_name().to_owned()}</h2>
                                <p class="profile-card__role">{user.role.label()}</p>
                                <p class="profile-card__points">
                                    {format!("{} pts", format_points(user.points_total))}
                                </p>
                            </div>
                            <dl class="profile-details">
                                {detail("Username", user.username.clone())}
                                {detail("Full name", user.full_name.clone().unwrap_or_default())}
                                {detail("Email", user.email.clone())}
                                {detail("Department", user.department.clone().unwrap_or_default())}
                                {detail(
                                    "Joined",
                                    user.created_at.as_deref().map(format_date).unwrap_or_default(),
                                )}
                            </dl>
                        </section>
                    }
                }}
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=start_edit>
                                "Edit profile"
                            </button>
                        }
                    }
                >
                    <form class="profile-form" on:submit=on_save>
                        <label class="form-field">
                            <span>"Username"</span>
                            <input
                                type="text"
                                prop:value=move || draft.get().username
                                on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span>"Full name"</span>
                            <input
                                type="text"
                                prop:value=move || draft.get().full_name
                                on:input=move |ev| draft.update(|d| d.full_name = event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span>"Email"</span>
                            <input type="email" disabled=true prop:value=move || draft.get().email/>
                        </label>
                        <label class="form-field">
                            <span>"Department"</span>
                            <select
                                prop:value=move || draft.get().department
                                on:change=move |ev| draft.update(|d| d.department = event_target_value(&ev))
                            >
                                {DEPARTMENTS
                                    .into_iter()
                                    .map(|name| view! { <option value=name>{name}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <div class="form-actions">
                            <button
                                class="btn"
                                type="button"
                                disabled=move || saving.get()
                                on:click=move |_| editing.set(false)
                            >
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save changes" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </AppShell>
    }
}
