//! Intents and effects for the swipe decision engine.

use std::time::Duration;

use crate::ui::mvi::Intent;

use super::state::{Decision, DecisionToken};

/// Intents that can be dispatched to the swipe engine.
#[derive(Debug, Clone)]
pub enum SwipeIntent {
    /// Finger moved; `delta_x` is the offset from the drag start.
    DragUpdate { delta_x: f32 },

    /// Finger lifted.
    DragEnd { delta_x: f32, threshold: f32 },

    /// Like button.
    Like,

    /// Dislike button.
    Dislike,

    /// Settle-delay callback for the decision identified by `token`.
    Settle { token: DecisionToken },

    /// Move to the next card unconditionally.
    Advance,
}

impl Intent for SwipeIntent {}

/// Effects the host acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeEffect {
    /// Drag fell short of the threshold; animate the card back to center.
    SnapBack,

    /// Animate the card off screen, then dispatch `Settle { token }` after
    /// `settle_delay`.
    ExitAnimation {
        decision: Decision,
        target_offset: f32,
        settle_delay: Duration,
        token: DecisionToken,
    },

    /// The like produced a (demo) match with this profile.
    MatchSucceeded { profile_id: u64 },

    /// The deck moved on to `profile_index`.
    Advanced { profile_index: usize },
}
