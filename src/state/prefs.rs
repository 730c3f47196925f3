#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::net::types::{NotificationKind, SaveOutcome, UserPreferences};

/// Locally edited copy of the user's preferences, held by the editing
/// surface until a save lands. The server's echo (or the submitted draft,
/// on a `204`) becomes canonical via [`PreferencesDraft::apply_outcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferencesDraft {
    current: UserPreferences,
    saving: bool,
}

impl PreferencesDraft {
    pub fn from_saved(saved: UserPreferences) -> Self {
        Self {
            current: saved,
            saving: false,
        }
    }

    pub fn current(self) -> UserPreferences {
        self.current
    }

    pub fn is_saving(self) -> bool {
        self.saving
    }

    pub fn is_enabled(self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.current.email,
            NotificationKind::Sms => self.current.sms,
            NotificationKind::Push => self.current.push,
        }
    }

    pub fn toggle(&mut self, kind: NotificationKind) {
        match kind {
            NotificationKind::Email => self.current.email = !self.current.email,
            NotificationKind::Sms => self.current.sms = !self.current.sms,
            NotificationKind::Push => self.current.push = !self.current.push,
        }
    }

    /// Set every channel at once, for the master "View All" checkbox.
    pub fn set_all(&mut self, enabled: bool) {
        self.current = UserPreferences {
            email: enabled,
            sms: enabled,
            push: enabled,
        };
    }

    pub fn all_checked(self) -> bool {
        self.current.all_enabled()
    }

    /// Master checkbox shows an indeterminate mark when some but not all
    /// channels are on.
    pub fn indeterminate(self) -> bool {
        !self.current.all_enabled() && self.current.any_enabled()
    }

    /// The merge-patch body to submit. The server accepts partial patches;
    /// the client always sends the full triple.
    pub fn as_patch(self) -> UserPreferences {
        self.current
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
    }

    /// Fold a completed save back into the draft. A `200` echo replaces the
    /// draft wholesale; a `204` keeps what was just submitted.
    pub fn apply_outcome(&mut self, submitted: UserPreferences, outcome: SaveOutcome) {
        self.current = outcome.canonical_or(submitted);
        self.saving = false;
    }

    /// A failed save leaves the draft editable as typed.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }
}
