//! Application header: title, signed-in email, color scheme toggle,
//! preferences and sign-out.

use leptos::prelude::*;

use crate::state::session::{SessionState, clear_session};
use crate::util::color_scheme;

/// Header bar for the notifications page.
///
/// Sign-out clears the persisted session; navigation to the login page is
/// handled by the page's route guard reacting to the empty token.
#[component]
pub fn Header(on_edit_preferences: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = move || session.get().email().unwrap_or_default().to_owned();

    let dark_mode = RwSignal::new(color_scheme::prefers_dark());
    color_scheme::apply(dark_mode.get_untracked());

    view! {
        <header class="header">
            <h1 class="header__title">"User Preferences"</h1>
            <div class="header__actions">
                <span class="header__email">{email}</span>
                <button
                    class="btn btn--icon"
                    title="Toggle color scheme"
                    on:click=move |_| {
                        dark_mode.set(color_scheme::toggle(dark_mode.get_untracked()));
                    }
                >
                    {move || if dark_mode.get() { "Light" } else { "Dark" }}
                </button>
                <button class="btn" on:click=move |_| on_edit_preferences.run(())>
                    "Edit Preferences"
                </button>
                <button class="btn" on:click=move |_| clear_session(session)>
                    "Sign Out"
                </button>
            </div>
        </header>
    }
}
