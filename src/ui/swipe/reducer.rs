//! Reducer for swipe engine state transitions.

use crate::ui::mvi::Reducer;

use super::intent::{SwipeEffect, SwipeIntent};
use super::state::{classify, Decision, DecisionToken, PendingDecision, SwipeState};

/// Reducer for gesture classification and deck advancement.
pub struct SwipeReducer;

impl Reducer for SwipeReducer {
    type State = SwipeState;
    type Intent = SwipeIntent;
    type Effect = SwipeEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            SwipeIntent::DragUpdate { delta_x } => {
                state.drag_offset = delta_x;
                (state, Vec::new())
            }

            SwipeIntent::DragEnd { delta_x, threshold } => {
                match classify(delta_x, threshold) {
                    Decision::None => {
                        state.drag_offset = 0.0;
                        (state, vec![SwipeEffect::SnapBack])
                    }
                    decision => {
                        state.drag_offset = delta_x;
                        decide(state, decision)
                    }
                }
            }

            SwipeIntent::Like => decide(state, Decision::Like),

            SwipeIntent::Dislike => decide(state, Decision::Dislike),

            SwipeIntent::Settle { token } => match state.pending {
                Some(pending) if pending.token == token => advance(state),
                _ => {
                    tracing::debug!(?token, "Stale settle ignored");
                    (state, Vec::new())
                }
            },

            SwipeIntent::Advance => advance(state),
        }
    }
}

/// Record a like/dislike and emit its exit animation.
fn decide(mut state: SwipeState, decision: Decision) -> (SwipeState, Vec<SwipeEffect>) {
    let profile_id = match state.current_profile().map(|p| p.id) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, ?decision, "Decision on empty deck ignored");
            state.drag_offset = 0.0;
            return (state, Vec::new());
        }
    };

    let mut effects = Vec::with_capacity(2);
    let exit_offset = match decision {
        Decision::Like => state.settings.exit_offset,
        _ => -state.settings.exit_offset,
    };

    // A newer decision supersedes a pending one; its settle becomes stale.
    state.last_token += 1;
    let token = DecisionToken(state.last_token);
    state.pending = Some(PendingDecision {
        token,
        decision,
        exit_offset,
    });
    effects.push(SwipeEffect::ExitAnimation {
        decision,
        target_offset: exit_offset,
        settle_delay: state.settings.settle_delay,
        token,
    });

    if decision == Decision::Like {
        state.match_toggle = !state.match_toggle;
        if state.match_toggle {
            effects.push(SwipeEffect::MatchSucceeded { profile_id });
        }
    }

    tracing::info!(profile_id, ?decision, match_toggle = state.match_toggle, "Swipe decision");
    (state, effects)
}

fn advance(mut state: SwipeState) -> (SwipeState, Vec<SwipeEffect>) {
    state.pending = None;
    state.drag_offset = 0.0;
    if state.profiles.is_empty() {
        return (state, Vec::new());
    }

    state.profile_index = (state.profile_index + 1) % state.profiles.len();
    let profile_index = state.profile_index;
    (state, vec![SwipeEffect::Advanced { profile_index }])
}
