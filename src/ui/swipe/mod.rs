//! Swipe decision engine for the matching deck.
//!
//! Classifies drags into like/dislike, emits exit animation targets and
//! advances the deck once the host reports the animation has settled.
//! Each decision carries a [`DecisionToken`]; a settle callback holding an
//! older token is ignored, so a delayed callback can never advance twice.

mod intent;
mod reducer;
mod state;

pub use intent::{SwipeEffect, SwipeIntent};
pub use reducer::SwipeReducer;
pub use state::{
    classify, CardTransform, Decision, DecisionToken, PendingDecision, SwipeError, SwipePhase,
    SwipeSettings, SwipeState, DEFAULT_THRESHOLD, EXIT_OFFSET, ROTATION_FACTOR, SETTLE_DELAY,
};

use crate::profile::CandidateProfile;
use crate::route::Route;
use crate::ui::mvi::Reducer;

/// Result of a finished drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub effects: Vec<SwipeEffect>,
}

/// Route for the match dialog's "go to chat" action.
pub fn open_match_chat(profile_id: u64) -> Route {
    Route::Chat(profile_id)
}

/// Owns swipe state and exposes the operations the host calls.
#[derive(Debug, Default)]
pub struct SwipeDecisionEngine {
    state: SwipeState,
}

impl SwipeDecisionEngine {
    pub fn new(profiles: Vec<CandidateProfile>, settings: SwipeSettings) -> Self {
        Self {
            state: SwipeState::new(profiles, settings),
        }
    }

    pub fn state(&self) -> &SwipeState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: SwipeIntent) -> Vec<SwipeEffect> {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = SwipeReducer::reduce(state, intent);
        self.state = next;
        effects
    }

    /// Track the finger and return the transform to render.
    pub fn on_drag_update(&mut self, delta_x: f32) -> CardTransform {
        self.dispatch(SwipeIntent::DragUpdate { delta_x });
        self.state.card_transform()
    }

    pub fn on_drag_end(&mut self, delta_x: f32, threshold: f32) -> DecisionOutcome {
        let decision = classify(delta_x, threshold);
        let effects = self.dispatch(SwipeIntent::DragEnd { delta_x, threshold });
        DecisionOutcome { decision, effects }
    }

    /// [`Self::on_drag_end`] with the configured threshold.
    pub fn on_drag_end_default(&mut self, delta_x: f32) -> DecisionOutcome {
        let threshold = self.state.settings.threshold;
        self.on_drag_end(delta_x, threshold)
    }

    pub fn like(&mut self) -> Vec<SwipeEffect> {
        self.dispatch(SwipeIntent::Like)
    }

    pub fn dislike(&mut self) -> Vec<SwipeEffect> {
        self.dispatch(SwipeIntent::Dislike)
    }

    /// Settle-delay callback. Returns whether the deck advanced.
    pub fn settle(&mut self, token: DecisionToken) -> bool {
        self.dispatch(SwipeIntent::Settle { token })
            .iter()
            .any(|e| matches!(e, SwipeEffect::Advanced { .. }))
    }

    pub fn advance(&mut self) {
        self.dispatch(SwipeIntent::Advance);
    }

    pub fn current_profile(&self) -> Result<&CandidateProfile, SwipeError> {
        self.state.current_profile()
    }

    pub fn profile_index(&self) -> usize {
        self.state.profile_index
    }

    pub fn drag_offset(&self) -> f32 {
        self.state.drag_offset
    }

    pub fn match_toggle(&self) -> bool {
        self.state.match_toggle
    }

    pub fn pending_token(&self) -> Option<DecisionToken> {
        self.state.pending.map(|p| p.token)
    }
}
