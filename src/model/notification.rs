//! Notification model
//!
//! Short-lived feedback shown in the friend list title after an add or a split.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;

use super::friend::Friend;

/// How long a notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - operation completed (green)
    Success,
    /// Info - informational message (cyan)
    Info,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Notification for a newly added friend
    pub fn friend_added(name: &str) -> Self {
        Self::success(format!("Added {}", name))
    }

    /// Notification for an applied split, showing the friend's new standing
    pub fn split_applied(friend: &Friend, delta: Decimal) -> Self {
        let standing = friend.status().describe(&friend.name);
        if delta.is_zero() {
            Self::info(format!("Nothing to split. {}", standing))
        } else {
            Self::success(format!("Bill split. {}", standing))
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sarah(balance: i64) -> Friend {
        Friend::new(
            933372_u64,
            "Sarah",
            "https://i.pravatar.cc/48?u=933372",
            Decimal::from(balance),
        )
    }

    #[test]
    fn test_friend_added() {
        let n = Notification::friend_added("Dana");
        assert_eq!(n.message, "Added Dana");
        assert_eq!(n.kind, NotificationKind::Success);
    }

    #[test]
    fn test_split_applied_reports_new_standing() {
        let n = Notification::split_applied(&sarah(15), Decimal::from(-5));
        assert_eq!(n.message, "Bill split. Sarah owes you 15€");
        assert_eq!(n.kind, NotificationKind::Success);
    }

    #[test]
    fn test_zero_split_is_info() {
        let n = Notification::split_applied(&sarah(20), Decimal::ZERO);
        assert_eq!(n.kind, NotificationKind::Info);
    }

    #[test]
    fn test_notification_not_expired_immediately() {
        let n = Notification::success("Test");
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let mut n = Notification::info("Old");
        if let Some(past) = Instant::now().checked_sub(NOTIFICATION_TTL) {
            n.created_at = past;
            assert!(n.is_expired());
        }
    }
}
