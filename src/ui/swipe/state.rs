//! State for the swipe decision engine.

use std::time::Duration;

use thiserror::Error;

use crate::profile::CandidateProfile;
use crate::ui::mvi::UiState;

/// Drag distance (logical px) that separates a swipe from a tap.
pub const DEFAULT_THRESHOLD: f32 = 100.0;

/// Magnitude of the exit animation target offset.
pub const EXIT_OFFSET: f32 = 250.0;

/// Recommended pause between decision and `Settle`.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Card rotation in degrees per px of horizontal drag.
pub const ROTATION_FACTOR: f32 = 0.05;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwipeError {
    #[error("Profile index {index} out of range for {len} candidates")]
    OutOfRange { index: usize, len: usize },
}

/// Tunables for gesture classification and animation hints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSettings {
    pub threshold: f32,
    pub exit_offset: f32,
    pub settle_delay: Duration,
    pub rotation_factor: f32,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            exit_offset: EXIT_OFFSET,
            settle_delay: SETTLE_DELAY,
            rotation_factor: ROTATION_FACTOR,
        }
    }
}

/// Outcome of classifying a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    None,
    Like,
    Dislike,
}

/// Classify a finished drag.
pub fn classify(delta_x: f32, threshold: f32) -> Decision {
    if delta_x <= -threshold {
        Decision::Dislike
    } else if delta_x >= threshold {
        Decision::Like
    } else {
        Decision::None
    }
}

/// Identifies one like/dislike so its delayed settle can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecisionToken(pub(crate) u64);

/// A decision whose exit animation is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDecision {
    pub token: DecisionToken,
    pub decision: Decision,
    pub exit_offset: f32,
}

/// Rendering hint for the card under the finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f32,
    pub rotate_deg: f32,
}

/// Coarse phase, derived from the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    Deciding(Decision),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwipeState {
    pub profiles: Vec<CandidateProfile>,
    pub profile_index: usize,
    pub drag_offset: f32,
    /// Demo parity rule: flips on every like, a like that sets it matches.
    pub match_toggle: bool,
    pub pending: Option<PendingDecision>,
    /// Last token handed out.
    pub last_token: u64,
    pub settings: SwipeSettings,
}

impl UiState for SwipeState {}

impl SwipeState {
    pub fn new(profiles: Vec<CandidateProfile>, settings: SwipeSettings) -> Self {
        Self {
            profiles,
            settings,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> SwipePhase {
        match self.pending {
            Some(pending) => SwipePhase::Deciding(pending.decision),
            None if self.drag_offset != 0.0 => SwipePhase::Dragging,
            None => SwipePhase::Idle,
        }
    }

    pub fn current_profile(&self) -> Result<&CandidateProfile, SwipeError> {
        self.profiles
            .get(self.profile_index)
            .ok_or(SwipeError::OutOfRange {
                index: self.profile_index,
                len: self.profiles.len(),
            })
    }

    pub fn card_transform(&self) -> CardTransform {
        CardTransform {
            translate_x: self.drag_offset,
            rotate_deg: self.drag_offset * self.settings.rotation_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::demo_candidates;

    #[test]
    fn classify_uses_inclusive_threshold() {
        assert_eq!(classify(-150.0, 100.0), Decision::Dislike);
        assert_eq!(classify(150.0, 100.0), Decision::Like);
        assert_eq!(classify(50.0, 100.0), Decision::None);
        assert_eq!(classify(100.0, 100.0), Decision::Like);
        assert_eq!(classify(-100.0, 100.0), Decision::Dislike);
        assert_eq!(classify(0.0, 100.0), Decision::None);
    }

    #[test]
    fn current_profile_on_empty_deck_is_out_of_range() {
        let state = SwipeState::default();
        assert_eq!(
            state.current_profile(),
            Err(SwipeError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn phase_follows_fields() {
        let mut state = SwipeState::new(demo_candidates(), SwipeSettings::default());
        assert_eq!(state.phase(), SwipePhase::Idle);

        state.drag_offset = 12.0;
        assert_eq!(state.phase(), SwipePhase::Dragging);

        state.pending = Some(PendingDecision {
            token: DecisionToken(1),
            decision: Decision::Like,
            exit_offset: EXIT_OFFSET,
        });
        assert_eq!(state.phase(), SwipePhase::Deciding(Decision::Like));
    }

    #[test]
    fn card_transform_rotates_proportionally() {
        let state = SwipeState {
            drag_offset: 80.0,
            ..Default::default()
        };
        let transform = state.card_transform();
        assert_eq!(transform.translate_x, 80.0);
        assert!((transform.rotate_deg - 4.0).abs() < 1e-4);
    }
}
