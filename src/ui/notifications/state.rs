//! State for the notification center.

use std::time::{Duration, Instant, SystemTime};

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// How long a toast stays visible before `Tick` hides it.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// What a notification is about. Drives click-through routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Chat,
    Match,
    System,
}

/// A single notification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique within the active list. Insertion order is display order.
    pub id: u64,
    pub title: String,
    pub message: String,
    pub timestamp: SystemTime,
    /// Only ever goes from `false` to `true`.
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub friend_id: u64,
}

impl Notification {
    /// Create an unread notification stamped with the current wall clock.
    pub fn new(
        id: u64,
        kind: NotificationKind,
        friend_id: u64,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            timestamp: SystemTime::now(),
            read: false,
            kind,
            friend_id,
        }
    }
}

/// Single-slot toast presentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible {
        /// Snapshot of the notification being shown.
        current: Notification,
        expires_at: Instant,
    },
}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The notification currently shown, if any.
    pub fn current(&self) -> Option<&Notification> {
        match self {
            Self::Visible { current, .. } => Some(current),
            Self::Hidden => None,
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        match self {
            Self::Visible { expires_at, .. } => Some(*expires_at),
            Self::Hidden => None,
        }
    }
}

/// Full state of the notification center.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCenterState {
    pub notifications: Vec<Notification>,
    pub toast: ToastState,
    pub toast_duration: Duration,
}

impl Default for NotificationCenterState {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            toast: ToastState::Hidden,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl UiState for NotificationCenterState {}

impl NotificationCenterState {
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn find(&self, id: u64) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }
}
