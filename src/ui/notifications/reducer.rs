//! Reducer for notification center state transitions.

use crate::ui::mvi::Reducer;

use super::intent::{NotificationEffect, NotificationIntent};
use super::resolve_route_intent;
use super::state::{NotificationCenterState, ToastState};

/// Reducer for notification list and toast slot transitions.
pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationCenterState;
    type Intent = NotificationIntent;
    type Effect = NotificationEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            NotificationIntent::Add(notification) => {
                if state.find(notification.id).is_some() {
                    tracing::debug!(id = notification.id, "Duplicate notification id ignored");
                } else {
                    state.notifications.push(notification);
                }
                (state, Vec::new())
            }

            NotificationIntent::MarkRead { id, now } => {
                let Some(entry) = state.notifications.iter_mut().find(|n| n.id == id) else {
                    tracing::debug!(id, "mark_read on unknown notification ignored");
                    return (state, Vec::new());
                };
                if entry.read {
                    return (state, Vec::new());
                }

                entry.read = true;
                let current = entry.clone();
                let expires_at = now + state.toast_duration;
                // Replaces whatever was showing; there is no queue.
                state.toast = ToastState::Visible {
                    current,
                    expires_at,
                };
                (state, vec![NotificationEffect::ShowToast { id, expires_at }])
            }

            NotificationIntent::MarkAllRead => {
                for n in &mut state.notifications {
                    n.read = true;
                }
                (state, Vec::new())
            }

            NotificationIntent::DismissToast => {
                state.toast = ToastState::Hidden;
                (state, Vec::new())
            }

            NotificationIntent::Tick { now } => {
                if state.toast.expires_at().is_some_and(|at| now >= at) {
                    state.toast = ToastState::Hidden;
                }
                (state, Vec::new())
            }

            NotificationIntent::ToastClicked => {
                let toast = std::mem::take(&mut state.toast);
                let effects = match toast {
                    ToastState::Visible { current, .. } => resolve_route_intent(&current)
                        .map(NotificationEffect::Navigate)
                        .into_iter()
                        .collect(),
                    ToastState::Hidden => Vec::new(),
                };
                (state, effects)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::route::Route;
    use crate::ui::notifications::{Notification, NotificationKind};

    fn state_with(ids: &[u64]) -> NotificationCenterState {
        NotificationCenterState {
            notifications: ids
                .iter()
                .map(|&id| Notification::new(id, NotificationKind::Like, id * 10, "t", "m"))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn add_does_not_show_toast() {
        let (state, effects) = NotificationReducer::reduce(
            NotificationCenterState::default(),
            NotificationIntent::Add(Notification::new(1, NotificationKind::Chat, 2, "t", "m")),
        );
        assert_eq!(state.notifications.len(), 1);
        assert!(!state.toast.is_visible());
        assert!(effects.is_empty());
    }

    #[test]
    fn add_with_duplicate_id_is_ignored() {
        let (state, _) = NotificationReducer::reduce(
            state_with(&[1]),
            NotificationIntent::Add(Notification::new(1, NotificationKind::Chat, 5, "x", "y")),
        );
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].kind, NotificationKind::Like);
    }

    #[test]
    fn mark_read_shows_toast_with_expiry() {
        let now = Instant::now();
        let (state, effects) =
            NotificationReducer::reduce(state_with(&[1, 2]), NotificationIntent::MarkRead { id: 2, now });

        assert!(state.find(2).unwrap().read);
        assert!(!state.find(1).unwrap().read);
        assert_eq!(state.toast.current().map(|n| n.id), Some(2));
        assert_eq!(state.toast.expires_at(), Some(now + Duration::from_secs(5)));
        assert_eq!(
            effects,
            vec![NotificationEffect::ShowToast {
                id: 2,
                expires_at: now + Duration::from_secs(5)
            }]
        );
    }

    #[test]
    fn mark_read_unknown_id_is_noop() {
        let before = state_with(&[1]);
        let (after, effects) = NotificationReducer::reduce(
            before.clone(),
            NotificationIntent::MarkRead {
                id: 99,
                now: Instant::now(),
            },
        );
        assert_eq!(before, after);
        assert!(effects.is_empty());
    }

    #[test]
    fn mark_read_replaces_visible_toast() {
        let now = Instant::now();
        let (state, _) =
            NotificationReducer::reduce(state_with(&[1, 2]), NotificationIntent::MarkRead { id: 1, now });
        let later = now + Duration::from_secs(2);
        let (state, _) =
            NotificationReducer::reduce(state, NotificationIntent::MarkRead { id: 2, now: later });

        assert_eq!(state.toast.current().map(|n| n.id), Some(2));
        assert_eq!(state.toast.expires_at(), Some(later + Duration::from_secs(5)));
    }

    #[test]
    fn tick_before_expiry_keeps_toast() {
        let now = Instant::now();
        let (state, _) =
            NotificationReducer::reduce(state_with(&[1]), NotificationIntent::MarkRead { id: 1, now });
        let (state, _) = NotificationReducer::reduce(
            state,
            NotificationIntent::Tick {
                now: now + Duration::from_millis(4999),
            },
        );
        assert!(state.toast.is_visible());
    }

    #[test]
    fn tick_at_expiry_hides_toast() {
        let now = Instant::now();
        let (state, _) =
            NotificationReducer::reduce(state_with(&[1]), NotificationIntent::MarkRead { id: 1, now });
        let (state, _) = NotificationReducer::reduce(
            state,
            NotificationIntent::Tick {
                now: now + Duration::from_secs(5),
            },
        );
        assert_eq!(state.toast, ToastState::Hidden);
    }

    #[test]
    fn toast_click_navigates_and_dismisses() {
        let now = Instant::now();
        let (state, _) =
            NotificationReducer::reduce(state_with(&[3]), NotificationIntent::MarkRead { id: 3, now });
        let (state, effects) = NotificationReducer::reduce(state, NotificationIntent::ToastClicked);

        assert!(!state.toast.is_visible());
        assert_eq!(effects, vec![NotificationEffect::Navigate(Route::Profile(30))]);
    }

    #[test]
    fn toast_click_when_hidden_is_noop() {
        let (state, effects) =
            NotificationReducer::reduce(state_with(&[1]), NotificationIntent::ToastClicked);
        assert!(!state.toast.is_visible());
        assert!(effects.is_empty());
    }
}
