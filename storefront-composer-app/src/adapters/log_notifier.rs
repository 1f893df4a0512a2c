//! Notifier that forwards to the `log` facade.

use storefront_composer_core::traits::Notifier;
use storefront_composer_core::types::{Notification, NotificationLevel};

/// Writes every notification to the log at a matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        let Notification { level, message } = notification;
        match level {
            NotificationLevel::Success | NotificationLevel::Info => log::info!("{message}"),
            NotificationLevel::Warning => log::warn!("{message}"),
            NotificationLevel::Error => log::error!("{message}"),
        }
    }
}
