use super::*;

// =============================================================
// Defaults and restore
// =============================================================

#[test]
fn default_session_is_signed_out() {
    let state = SessionState::default();
    assert!(state.token().is_none());
    assert!(state.email().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_without_storage_is_empty() {
    // Host-side there is no localStorage, so restore yields a clean state.
    assert_eq!(restore_session(), SessionState::default());
}

#[test]
fn new_normalizes_empty_fields() {
    let state = SessionState::new(Some(String::new()), Some(String::new()));
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Token handling
// =============================================================

#[test]
fn set_token_populates_session() {
    let mut state = SessionState::default();
    state.set_token(Some("tok-123".to_owned()));
    assert_eq!(state.token(), Some("tok-123"));
    assert!(state.is_authenticated());
}

#[test]
fn empty_token_never_authenticates() {
    let mut state = SessionState::default();
    state.set_token(Some(String::new()));
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn set_token_none_clears_token_only() {
    let mut state = SessionState::new(Some("tok".to_owned()), Some("a@b.c".to_owned()));
    state.set_token(None);
    assert!(!state.is_authenticated());
    assert_eq!(state.email(), Some("a@b.c"));
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn sign_out_clears_both_fields() {
    let mut state = SessionState::new(Some("tok".to_owned()), Some("a@b.c".to_owned()));
    state.sign_out();
    assert!(state.token().is_none());
    assert!(state.email().is_none());
}

#[test]
fn sign_out_is_idempotent() {
    let mut state = SessionState::default();
    state.sign_out();
    state.sign_out();
    assert_eq!(state, SessionState::default());
}

#[test]
fn clear_session_empties_a_populated_signal() {
    // The path every rejected token takes, including a 401 from a login
    // resubmitted while already signed in.
    use leptos::prelude::{GetUntracked, RwSignal};

    let session = RwSignal::new(SessionState::new(
        Some("stale-tok".to_owned()),
        Some("a@b.c".to_owned()),
    ));
    clear_session(session);
    assert!(!session.get_untracked().is_authenticated());
    assert!(session.get_untracked().email().is_none());
}
