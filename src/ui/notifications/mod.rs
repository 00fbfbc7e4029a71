//! Notification center: read/unread tracking plus a single-slot toast.
//!
//! The engine never schedules anything. The host calls [`NotificationCenter::tick`]
//! on its own cadence (frame callback, interval timer) and expiry is checked
//! against the instant it passes in.

mod intent;
mod reducer;
mod state;

use std::time::{Duration, Instant};

pub use intent::{NotificationEffect, NotificationIntent};
pub use reducer::NotificationReducer;
pub use state::{
    Notification, NotificationCenterState, NotificationKind, ToastState, DEFAULT_TOAST_DURATION,
};

use crate::route::Route;
use crate::ui::mvi::Reducer;

/// Map a notification to the screen its click-through opens.
///
/// Likes and matches open the friend's profile, chats open the thread.
/// System notifications have no target.
pub fn resolve_route_intent(notification: &Notification) -> Option<Route> {
    match notification.kind {
        NotificationKind::Like | NotificationKind::Match => {
            Some(Route::Profile(notification.friend_id))
        }
        NotificationKind::Chat => Some(Route::Chat(notification.friend_id)),
        NotificationKind::System => None,
    }
}

/// Owns notification state and exposes the operations the host calls.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    state: NotificationCenterState,
}

impl NotificationCenter {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            state: NotificationCenterState {
                toast_duration,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &NotificationCenterState {
        &self.state
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.state.notifications
    }

    pub fn toast(&self) -> &ToastState {
        &self.state.toast
    }

    /// Run one intent through the reducer and return its effects.
    pub fn dispatch(&mut self, intent: NotificationIntent) -> Vec<NotificationEffect> {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = NotificationReducer::reduce(state, intent);
        self.state = next;
        effects
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.dispatch(NotificationIntent::Add(notification));
    }

    /// Mark `id` read. Opens a toast only on the unread → read transition.
    pub fn mark_read(&mut self, id: u64, now: Instant) -> Vec<NotificationEffect> {
        self.dispatch(NotificationIntent::MarkRead { id, now })
    }

    pub fn mark_all_read(&mut self) {
        self.dispatch(NotificationIntent::MarkAllRead);
    }

    pub fn dismiss_toast(&mut self) {
        self.dispatch(NotificationIntent::DismissToast);
    }

    pub fn tick(&mut self, now: Instant) {
        self.dispatch(NotificationIntent::Tick { now });
    }

    /// Dismiss the toast and return where its click-through leads.
    pub fn click_toast(&mut self) -> Option<Route> {
        self.dispatch(NotificationIntent::ToastClicked)
            .into_iter()
            .find_map(|effect| match effect {
                NotificationEffect::Navigate(route) => Some(route),
                NotificationEffect::ShowToast { .. } => None,
            })
    }

    pub fn unread_count(&self) -> usize {
        self.state.unread_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_resolution_per_kind() {
        let make = |kind| Notification::new(1, kind, 42, "t", "m");
        assert_eq!(
            resolve_route_intent(&make(NotificationKind::Like)),
            Some(Route::Profile(42))
        );
        assert_eq!(
            resolve_route_intent(&make(NotificationKind::Match)),
            Some(Route::Profile(42))
        );
        assert_eq!(
            resolve_route_intent(&make(NotificationKind::Chat)),
            Some(Route::Chat(42))
        );
        assert_eq!(resolve_route_intent(&make(NotificationKind::System)), None);
    }

    #[test]
    fn new_uses_given_toast_duration() {
        let mut center = NotificationCenter::new(Duration::from_secs(2));
        center.add_notification(Notification::new(1, NotificationKind::Chat, 5, "t", "m"));
        let now = Instant::now();
        center.mark_read(1, now);
        assert_eq!(center.toast().expires_at(), Some(now + Duration::from_secs(2)));
    }
}
