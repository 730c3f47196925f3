#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Delivery channel of a notification, as the server spells it on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    Email,
    Sms,
    Push,
}

impl NotificationKind {
    /// Human-facing label for table cells and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Sms => "SMS",
            Self::Push => "PUSH",
        }
    }
}

/// A single notification row. Server-owned and immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Timestamp string as stored by the API, e.g. `2006-01-02 15:04:05`.
    pub created_at: String,
}

/// Per-channel visibility preferences. Mutable via a single merge-patch write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl UserPreferences {
    /// The channels the user currently has enabled, in display order.
    pub fn enabled_kinds(self) -> Vec<NotificationKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.email {
            kinds.push(NotificationKind::Email);
        }
        if self.sms {
            kinds.push(NotificationKind::Sms);
        }
        if self.push {
            kinds.push(NotificationKind::Push);
        }
        kinds
    }

    pub fn all_enabled(self) -> bool {
        self.email && self.sms && self.push
    }

    pub fn any_enabled(self) -> bool {
        self.email || self.sms || self.push
    }

    /// True when every channel is off, which hides the notifications table
    /// entirely in favor of an explanatory empty state.
    pub fn all_disabled(self) -> bool {
        !self.any_enabled()
    }
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Success body of `GET /notifications`: the list plus the preferences that
/// shaped it, returned together so the two can never be observed out of sync.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub preferences: UserPreferences,
}

/// Reported health of the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Unhealthy,
}

/// Body of `GET /healthz`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

/// Outcome of `POST /preferences`.
///
/// A `200` carries the server's canonical preferences, which replace the
/// local draft. A `204` means the write was accepted without an echo, so the
/// just-submitted draft stays canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Canonical(UserPreferences),
    Accepted,
}

impl SaveOutcome {
    /// The preferences the client should treat as canonical after a save of
    /// `submitted` completed with this outcome.
    pub fn canonical_or(self, submitted: UserPreferences) -> UserPreferences {
        match self {
            Self::Canonical(echoed) => echoed,
            Self::Accepted => submitted,
        }
    }
}
