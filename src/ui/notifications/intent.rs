//! Intents and effects for the notification center.

use std::time::Instant;

use crate::route::Route;
use crate::ui::mvi::Intent;

use super::state::Notification;

/// Intents that can be dispatched to the notification center.
#[derive(Debug, Clone)]
pub enum NotificationIntent {
    /// Append a notification. Never shows a toast on its own.
    Add(Notification),

    /// Mark one notification read and show it as the toast.
    MarkRead {
        id: u64,
        /// Time the action happened; expiry is computed from it.
        now: Instant,
    },

    /// Mark every notification read. Leaves the toast alone.
    MarkAllRead,

    /// Hide the toast immediately.
    DismissToast,

    /// Timer tick driving toast expiry.
    Tick { now: Instant },

    /// User tapped the visible toast.
    ToastClicked,
}

impl Intent for NotificationIntent {}

/// Effects the host acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEffect {
    /// A toast started showing this notification.
    ShowToast { id: u64, expires_at: Instant },

    /// Navigate to the given screen.
    Navigate(Route),
}
