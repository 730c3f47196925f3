use super::*;

fn prefs(email: bool, sms: bool, push: bool) -> UserPreferences {
    UserPreferences { email, sms, push }
}

// =============================================================
// Editing
// =============================================================

#[test]
fn draft_starts_from_saved_value() {
    let draft = PreferencesDraft::from_saved(prefs(true, false, true));
    assert!(draft.is_enabled(NotificationKind::Email));
    assert!(!draft.is_enabled(NotificationKind::Sms));
    assert!(draft.is_enabled(NotificationKind::Push));
    assert!(!draft.is_saving());
}

#[test]
fn toggle_flips_one_channel() {
    let mut draft = PreferencesDraft::from_saved(prefs(false, false, false));
    draft.toggle(NotificationKind::Sms);
    assert_eq!(draft.as_patch(), prefs(false, true, false));
    draft.toggle(NotificationKind::Sms);
    assert_eq!(draft.as_patch(), prefs(false, false, false));
}

#[test]
fn set_all_covers_every_channel() {
    let mut draft = PreferencesDraft::from_saved(prefs(true, false, true));
    draft.set_all(true);
    assert_eq!(draft.as_patch(), prefs(true, true, true));
    draft.set_all(false);
    assert_eq!(draft.as_patch(), prefs(false, false, false));
}

// =============================================================
// Master checkbox
// =============================================================

#[test]
fn all_checked_only_when_every_channel_on() {
    assert!(PreferencesDraft::from_saved(prefs(true, true, true)).all_checked());
    assert!(!PreferencesDraft::from_saved(prefs(true, true, false)).all_checked());
}

#[test]
fn indeterminate_when_mixed() {
    assert!(PreferencesDraft::from_saved(prefs(true, false, false)).indeterminate());
    assert!(!PreferencesDraft::from_saved(prefs(true, true, true)).indeterminate());
    assert!(!PreferencesDraft::from_saved(prefs(false, false, false)).indeterminate());
}

// =============================================================
// Save outcomes
// =============================================================

#[test]
fn echo_replaces_submitted_draft() {
    let submitted = prefs(true, false, true);
    let mut draft = PreferencesDraft::from_saved(submitted);
    draft.begin_save();
    assert!(draft.is_saving());

    let echoed = prefs(true, true, true);
    draft.apply_outcome(submitted, SaveOutcome::Canonical(echoed));
    assert_eq!(draft.as_patch(), echoed);
    assert!(!draft.is_saving());
}

#[test]
fn accepted_keeps_submitted_draft() {
    let submitted = prefs(true, false, true);
    let mut draft = PreferencesDraft::from_saved(prefs(false, false, false));
    draft.begin_save();
    draft.apply_outcome(submitted, SaveOutcome::Accepted);
    assert_eq!(draft.as_patch(), submitted);
}

#[test]
fn failed_save_leaves_draft_editable() {
    let mut draft = PreferencesDraft::from_saved(prefs(false, true, false));
    draft.toggle(NotificationKind::Email);
    draft.begin_save();
    draft.save_failed();
    assert!(!draft.is_saving());
    assert_eq!(draft.as_patch(), prefs(true, true, false));
}
