//! Notification, privacy and appearance preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Saving is simulated; the only setting with a visible effect is the theme.
//! Picking one updates [`UiState::theme`], which the app root applies to the
//! document right away.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::state::settings::{
    AppearanceSettings, FontSize, NotificationKind, ProfileVisibility, SettingsState,
};
use crate::state::ui::UiState;
use crate::util::dark_mode::ThemePreference;
use crate::util::timer;

pub const SAVE_LATENCY: Duration = Duration::from_secs(1);
pub const SAVED_NOTICE_DURATION: Duration = Duration::from_secs(3);

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let settings = RwSignal::new(SettingsState {
        appearance: AppearanceSettings {
            theme: ui.get_untracked().theme,
            ..Default::default()
        },
        ..SettingsState::default()
    });
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_theme = move |raw: String| {
        let Some(theme) = ThemePreference::parse(&raw) else {
            return;
        };
        settings.update(|s| s.appearance.theme = theme);
        ui.update(|u| u.theme = theme);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        leptos::logging::log!("settings save requested: {:?}", settings.get_untracked());
        timer::after(SAVE_LATENCY, move || {
            saving.set(false);
            saved.set(true);
            timer::after(SAVED_NOTICE_DURATION, move || saved.set(false));
        });
    };

    view! {
        <AppShell>
            <div class="settings-page">
                <h1 class="page-title">"Settings"</h1>
                <form class="settings-form" on:submit=on_save>
                    <fieldset class="settings-section">
                        <legend>"Notifications"</legend>
                        {NotificationKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <label class="form-check">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || settings.get().notifications.get(kind)
                                            on:change=move |ev| {
                                                let enabled = event_target_checked(&ev);
                                                settings.update(|s| s.notifications.set(kind, enabled));
                                            }
                                        />
                                        <span>{kind.label()}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>

                    <fieldset class="settings-section">
                        <legend>"Privacy"</legend>
                        <label class="form-field">
                            <span>"Profile visibility"</span>
                            <select
                                prop:value=move || settings.get().privacy.visibility.as_str()
                                on:change=move |ev| {
                                    if let Some(v) = ProfileVisibility::parse(&event_target_value(&ev)) {
                                        settings.update(|s| s.privacy.visibility = v);
                                    }
                                }
                            >
                                {ProfileVisibility::ALL
                                    .into_iter()
                                    .map(|v| view! { <option value=v.as_str()>{v.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || settings.get().privacy.show_rank
                                on:change=move |ev| {
                                    let enabled = event_target_checked(&ev);
                                    settings.update(|s| s.privacy.show_rank = enabled);
                                }
                            />
                            <span>"Show my rank on the leaderboard"</span>
                        </label>
                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || settings.get().privacy.share_activity
                                on:change=move |ev| {
                                    let enabled = event_target_checked(&ev);
                                    settings.update(|s| s.privacy.share_activity = enabled);
                                }
                            />
                            <span>"Share my task activity with colleagues"</span>
                        </label>
                    </fieldset>

                    <fieldset class="settings-section">
                        <legend>"Appearance"</legend>
                        <label class="form-field">
                            <span>"Theme"</span>
                            <select
                                prop:value=move || settings.get().appearance.theme.as_str()
                                on:change=move |ev| on_theme(event_target_value(&ev))
                            >
                                {ThemePreference::ALL
                                    .into_iter()
                                    .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form-field">
                            <span>"Font size"</span>
                            <select
                                prop:value=move || settings.get().appearance.font_size.as_str()
                                on:change=move |ev| {
                                    if let Some(size) = FontSize::parse(&event_target_value(&ev)) {
                                        settings.update(|s| s.appearance.font_size = size);
                                    }
                                }
                            >
                                {FontSize::ALL
                                    .into_iter()
                                    .map(|size| view! { <option value=size.as_str()>{size.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </fieldset>

                    <div class="form-actions">
                        <Show when=move || saved.get()>
                            <span class="notice notice--success">"Settings saved"</span>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save settings" }}
                        </button>
                    </div>
                </form>
            </div>
        </AppShell>
    }
}
