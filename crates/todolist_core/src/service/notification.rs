//! User-facing operation feedback.
//!
//! The manager emits one `Notification` per operation; rendering (toasts,
//! colors, durations) belongs to the caller.

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    /// Operation rejected without touching state.
    Warning,
    /// Operation failed; state may already be changed in memory.
    Error,
}

/// `(kind, title, description)` triple describing an operation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Observer receiving every notification emitted by a manager.
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

impl<F: FnMut(&Notification)> NotificationSink for F {
    fn notify(&mut self, notification: &Notification) {
        self(notification);
    }
}
