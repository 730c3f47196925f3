#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// `localStorage` key for the auth token.
pub const TOKEN_STORAGE_KEY: &str = "authToken";
/// `localStorage` key for the signed-in email.
pub const EMAIL_STORAGE_KEY: &str = "userEmail";

/// The client's belief about whether a user is authenticated, and as whom.
///
/// Plain data; persistence goes through [`restore_session`],
/// [`store_login`], and [`clear_session`] so the struct stays testable
/// without a browser. Both fields always change together on sign-out, so
/// observers never see a half-signed-out state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    auth_token: Option<String>,
    user_email: Option<String>,
}

impl SessionState {
    pub fn new(auth_token: Option<String>, user_email: Option<String>) -> Self {
        let mut state = Self::default();
        state.set_token(auth_token);
        state.set_email(user_email);
        state
    }

    /// The stored token, never empty.
    pub fn token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    /// True when a non-empty token is held. Authenticated fetches are gated
    /// on this; the server is still the final authority via 401.
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Set or clear the token. Empty strings normalize to `None` so an
    /// empty token can never masquerade as an authenticated session.
    pub fn set_token(&mut self, token: Option<String>) {
        self.auth_token = token.filter(|t| !t.is_empty());
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.user_email = email.filter(|e| !e.is_empty());
    }

    /// Clear both fields as a pair.
    pub fn sign_out(&mut self) {
        self.auth_token = None;
        self.user_email = None;
    }
}

/// Rebuild the session from `localStorage`, so a reload keeps the user
/// signed in. Outside the browser this is an empty session.
pub fn restore_session() -> SessionState {
    SessionState::new(
        storage::read(TOKEN_STORAGE_KEY),
        storage::read(EMAIL_STORAGE_KEY),
    )
}

/// Record a successful login: populate the signal and persist both keys.
pub fn store_login(
    session: leptos::prelude::RwSignal<SessionState>,
    token: String,
    email: String,
) {
    use leptos::prelude::Update;

    storage::write(TOKEN_STORAGE_KEY, &token);
    storage::write(EMAIL_STORAGE_KEY, &email);
    session.update(|s| {
        s.set_token(Some(token));
        s.set_email(Some(email));
    });
}

/// Sign out, or expire a session the server rejected with a 401.
///
/// This is the single place that clears session state; navigation happens
/// in the route guard that observes the token becoming empty, keeping the
/// network layer free of side effects.
pub fn clear_session(session: leptos::prelude::RwSignal<SessionState>) {
    use leptos::prelude::Update;

    storage::remove(TOKEN_STORAGE_KEY);
    storage::remove(EMAIL_STORAGE_KEY);
    let _ = session.try_update(SessionState::sign_out);
}
