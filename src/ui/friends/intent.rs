//! Intents and effects for the friends list.

use std::time::Instant;

use crate::route::Route;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FriendsIntent {
    /// Open the profile card of a friend.
    Select { friend_id: u64 },

    CloseProfile,

    /// Press started on the open profile card.
    HoldStart { now: Instant },

    /// Press released; cancels a pending hold.
    HoldEnd,

    /// Timer tick completing a hold.
    Tick { now: Instant },

    /// Chat action on a list row. Does not open the card.
    OpenChat { friend_id: u64 },
}

impl Intent for FriendsIntent {}

#[derive(Debug, Clone, PartialEq)]
pub enum FriendsEffect {
    Navigate(Route),
}
