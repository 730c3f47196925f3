//! Notifications page: the table, the preferences dialog, and the
//! signed-out guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::notifications_table::NotificationsTable;
use crate::components::preferences_dialog::PreferencesDialog;
use crate::net::query::CacheEntry;
use crate::net::types::NotificationsResponse;
use crate::state::session::SessionState;

/// Notifications page — table of notifications filtered by the user's
/// channel preferences. Redirects to `/login` whenever the session token
/// is empty, which also covers a 401 clearing the session mid-view.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cache = expect_context::<RwSignal<CacheEntry<NotificationsResponse>>>();
    let navigate = use_navigate();

    // A surfaced fetch error does not outlive the view that showed it:
    // mounting the page again retries instead of re-rendering a stale alert.
    cache.update(|entry| {
        if entry.error().is_some() {
            entry.invalidate();
        }
    });

    // Route guard: the one place that reacts to the token becoming empty.
    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Fetch on mount and whenever the entry has been invalidated. Serves
    // the cached value while a background refetch is in flight.
    Effect::new(move || {
        // Track the cache so invalidation re-runs the effect.
        let _ = cache.get();
        #[cfg(feature = "hydrate")]
        crate::net::query::ensure_notifications(session, cache);
    });

    let show_preferences = RwSignal::new(false);

    view! {
        <div class="notifications-page">
            <Header on_edit_preferences=Callback::new(move |()| show_preferences.set(true))/>

            {move || {
                let entry = cache.get();
                if let Some(err) = entry.error() {
                    view! {
                        <div class="alert alert--error">
                            <strong>"Error"</strong>
                            <span>{err.to_string()}</span>
                        </div>
                    }
                        .into_any()
                } else if let Some(data) = entry.value() {
                    if data.preferences.all_disabled() {
                        view! {
                            <div class="alert alert--info">
                                "You have all notification types disabled in your preferences. "
                                "Please enable at least one type to see notifications."
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <NotificationsTable
                                notifications=data.notifications.clone()
                                enabled_kinds=data.preferences.enabled_kinds()
                                is_loading=entry.is_loading()
                            />
                        }
                            .into_any()
                    }
                } else if entry.is_loading() {
                    view! { <p class="notifications-page__loading">"Loading notifications..."</p> }
                        .into_any()
                } else {
                    ().into_any()
                }
            }}

            <Show when=move || show_preferences.get()>
                <PreferencesDialog on_close=Callback::new(move |()| show_preferences.set(false))/>
            </Show>
        </div>
    }
}
