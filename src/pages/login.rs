//! Login page with an email/password form.
//!
//! Only the email is transmitted; the password field mirrors the original
//! sign-in surface and is validated non-empty but never leaves the browser.
//! Only a 200 login response populates the session — any failure leaves it
//! empty and renders an inline error.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Login page. On success the token and email are persisted and the user
/// lands back on the notifications page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Prefill with the last signed-in email, if one survived sign-out.
    let email = RwSignal::new(session.get_untracked().email().unwrap_or_default().to_owned());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        let email_value = email.get().trim().to_owned();
        if !email_value.contains('@') {
            error.set(Some("Invalid email".to_owned()));
            return;
        }
        if password.get().is_empty() {
            error.set(Some("Please enter a password".to_owned()));
            return;
        }
        if submitting.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let navigate = navigate.clone();
            submitting.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value).await {
                    Ok(resp) => {
                        crate::state::session::store_login(session, resp.token, email_value);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("login failed: {err}");
                        if err.is_unauthorized() {
                            // A signed-in user resubmitting the form must not
                            // keep a token the server just rejected.
                            crate::state::session::clear_session(session);
                        }
                        let _ = error.try_set(Some(err.to_string()));
                    }
                }
                let _ = submitting.try_set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &email_value;
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome!"</h1>
                <p class="login-card__hint">"Log in with your email and any password."</p>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="login-card__label">
                        "Email"
                        <input
                            class="login-card__input"
                            type="email"
                            placeholder="hello@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-card__label">
                        "Password"
                        <input
                            class="login-card__input"
                            type="password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error.get().is_some()>
                        <p class="login-card__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Submit" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
