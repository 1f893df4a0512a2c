//! Notification channel abstract Trait

use crate::types::Notification;

/// Toast-equivalent channel of the host screen
pub trait Notifier: Send + Sync {
    /// Show a notification. Delivery is fire-and-forget.
    fn notify(&self, notification: Notification);
}
