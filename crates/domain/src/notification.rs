//! Notifications — alerts and offers surfaced to the user.

use serde::{Deserialize, Serialize};

use crate::id::NotificationId;
use crate::time::{Timestamp, now};

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Something needing attention (humidity warning, maintenance due, …).
    Alert,
    /// A promotion or voucher.
    Offer,
}

/// A single inbox entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Timestamp,
    pub read: bool,
}

impl Notification {
    /// Create an unread notification timestamped now.
    #[must_use]
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            kind,
            created_at: now(),
            read: false,
        }
    }

    /// Mark the notification as read.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_unread() {
        let n = Notification::new(NotificationKind::Alert, "Humidity alert", "Clothes dry slowly");
        assert!(!n.read);
        assert_eq!(n.kind, NotificationKind::Alert);
    }

    #[test]
    fn should_mark_read() {
        let mut n = Notification::new(NotificationKind::Offer, "Voucher", "20% off cleaning");
        n.mark_read();
        assert!(n.read);
    }

    #[test]
    fn should_serialize_kind_lowercase() {
        let n = Notification::new(NotificationKind::Offer, "Voucher", "20% off");
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains("\"offer\""));
    }
}
