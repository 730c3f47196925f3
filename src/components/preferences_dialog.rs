//! Preferences editing dialog.
//!
//! Holds a [`PreferencesDraft`] seeded from the cached server value. Save
//! submits the full patch; success makes the echoed (or submitted, on 204)
//! value canonical, invalidates the notifications cache so the next read is
//! a fresh fetch, and closes the dialog. Failure shows the error and leaves
//! the dialog open with the draft editable.

use leptos::prelude::*;

use crate::net::query::CacheEntry;
use crate::net::types::{NotificationKind, NotificationsResponse};
use crate::state::prefs::PreferencesDraft;
use crate::state::session::SessionState;

/// Modal dialog for editing channel preferences.
#[component]
pub fn PreferencesDialog(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cache = expect_context::<RwSignal<CacheEntry<NotificationsResponse>>>();

    let saved = cache
        .get_untracked()
        .value()
        .map(|data| data.preferences)
        .unwrap_or_default();
    let draft = RwSignal::new(PreferencesDraft::from_saved(saved));
    let error = RwSignal::new(None::<String>);

    let disabled = move || draft.get().is_saving();

    let save = Callback::new(move |()| {
        if draft.get_untracked().is_saving() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = session.get_untracked().token().map(str::to_owned) else {
                return;
            };
            let patch = draft.get_untracked().as_patch();
            draft.update(PreferencesDraft::begin_save);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_preferences(&token, patch).await {
                    Ok(outcome) => {
                        let _ = draft.try_update(|d| d.apply_outcome(patch, outcome));
                        // Preferences change which notifications are
                        // visible; the next read must hit the network.
                        let _ = cache.try_update(CacheEntry::invalidate);
                        on_close.run(());
                    }
                    Err(err) => {
                        leptos::logging::warn!("preferences save failed: {err}");
                        if err.is_unauthorized() {
                            crate::state::session::clear_session(session);
                        }
                        let _ = draft.try_update(PreferencesDraft::save_failed);
                        let _ = error.try_set(Some(err.to_string()));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    let channel_row = move |kind: NotificationKind| {
        view! {
            <label class="prefs-dialog__row prefs-dialog__row--channel">
                <input
                    type="checkbox"
                    disabled=disabled
                    prop:checked=move || draft.get().is_enabled(kind)
                    on:change=move |_| draft.update(|d| d.toggle(kind))
                />
                {kind.label()}
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Preferences"</h2>
                <p>"What type of notifications do you want to see?"</p>

                <label class="prefs-dialog__row">
                    <input
                        type="checkbox"
                        disabled=disabled
                        prop:checked=move || draft.get().all_checked()
                        prop:indeterminate=move || draft.get().indeterminate()
                        on:change=move |_| {
                            let all = draft.get_untracked().all_checked();
                            draft.update(|d| d.set_all(!all));
                        }
                    />
                    "View All"
                </label>
                {channel_row(NotificationKind::Email)}
                {channel_row(NotificationKind::Sms)}
                {channel_row(NotificationKind::Push)}

                <Show when=move || error.get().is_some()>
                    <p class="prefs-dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" disabled=disabled on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=disabled on:click=move |_| save.run(())>
                        {move || if draft.get().is_saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
