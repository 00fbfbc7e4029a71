//! Friends list: open a friend's card, hold it to jump to the full profile,
//! or start a chat from the list row.

mod intent;
mod reducer;
mod state;

use std::time::{Duration, Instant};

pub use intent::{FriendsEffect, FriendsIntent};
pub use reducer::FriendsReducer;
pub use state::{
    demo_friends, display_name, Friend, FriendsState, Presence, DEFAULT_HOLD_DURATION,
};

use crate::route::Route;
use crate::ui::mvi::Reducer;

#[derive(Debug, Default)]
pub struct FriendsList {
    state: FriendsState,
}

impl FriendsList {
    pub fn new(friends: Vec<Friend>, hold_duration: Duration) -> Self {
        Self {
            state: FriendsState {
                friends,
                hold_duration,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &FriendsState {
        &self.state
    }

    pub fn friends(&self) -> &[Friend] {
        &self.state.friends
    }

    pub fn dispatch(&mut self, intent: FriendsIntent) -> Vec<FriendsEffect> {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = FriendsReducer::reduce(state, intent);
        self.state = next;
        effects
    }

    pub fn select(&mut self, friend_id: u64) {
        self.dispatch(FriendsIntent::Select { friend_id });
    }

    pub fn close_profile(&mut self) {
        self.dispatch(FriendsIntent::CloseProfile);
    }

    pub fn hold_start(&mut self, now: Instant) {
        self.dispatch(FriendsIntent::HoldStart { now });
    }

    pub fn hold_end(&mut self) {
        self.dispatch(FriendsIntent::HoldEnd);
    }

    /// Returns the profile route once a hold completes.
    pub fn tick(&mut self, now: Instant) -> Option<Route> {
        navigation(self.dispatch(FriendsIntent::Tick { now }))
    }

    pub fn open_chat(&mut self, friend_id: u64) -> Option<Route> {
        navigation(self.dispatch(FriendsIntent::OpenChat { friend_id }))
    }
}

fn navigation(effects: Vec<FriendsEffect>) -> Option<Route> {
    effects.into_iter().map(|FriendsEffect::Navigate(route)| route).next()
}
