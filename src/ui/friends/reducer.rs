//! Reducer for friends list state transitions.

use crate::route::Route;
use crate::ui::mvi::Reducer;

use super::intent::{FriendsEffect, FriendsIntent};
use super::state::FriendsState;

pub struct FriendsReducer;

impl Reducer for FriendsReducer {
    type State = FriendsState;
    type Intent = FriendsIntent;
    type Effect = FriendsEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            FriendsIntent::Select { friend_id } => {
                if state.find(friend_id).is_some() {
                    state.selected = Some(friend_id);
                    state.hold_until = None;
                } else {
                    tracing::debug!(friend_id, "Select on unknown friend ignored");
                }
                (state, Vec::new())
            }

            FriendsIntent::CloseProfile => {
                state.selected = None;
                state.hold_until = None;
                (state, Vec::new())
            }

            FriendsIntent::HoldStart { now } => {
                if state.selected.is_some() {
                    state.hold_until = Some(now + state.hold_duration);
                }
                (state, Vec::new())
            }

            FriendsIntent::HoldEnd => {
                state.hold_until = None;
                (state, Vec::new())
            }

            FriendsIntent::Tick { now } => {
                let due = state.hold_until.is_some_and(|until| now >= until);
                match state.selected {
                    Some(friend_id) if due => {
                        state.hold_until = None;
                        (
                            state,
                            vec![FriendsEffect::Navigate(Route::Profile(friend_id))],
                        )
                    }
                    _ => (state, Vec::new()),
                }
            }

            FriendsIntent::OpenChat { friend_id } => {
                if state.find(friend_id).is_none() {
                    tracing::debug!(friend_id, "Chat with unknown friend ignored");
                    return (state, Vec::new());
                }
                (state, vec![FriendsEffect::Navigate(Route::Chat(friend_id))])
            }
        }
    }
}
