//! Intents and effects for the introduction form.

use std::time::Instant;

use crate::profile::UserProfile;
use crate::services::{Big5, DescriptionRequest};
use crate::ui::mvi::Intent;

use super::state::FormField;

/// Intents that can be dispatched to the introduction form.
#[derive(Debug, Clone)]
pub enum IntroIntent {
    /// Text field edited. Clears that field's inline error.
    SetField { field: FormField, value: String },

    SetBig5(Big5),

    /// Toggle a tag from the fixed list. Tags outside it are ignored.
    ToggleTag { tag: String, now: Instant },

    /// Toggle an auto-detected tag (stored `#`-prefixed).
    ToggleAutoTag { tag: String, now: Instant },

    /// A photo was chosen and tag extraction started.
    PhotoSelected { image: String },

    TagsLoaded(Vec<String>),

    TagsFailed,

    /// User asked for a generated introduction.
    RequestDescription,

    DescriptionGenerated(String),

    DescriptionFailed(String),

    Submit,

    DismissNotice,

    /// Timer tick hiding the tag-limit warning.
    Tick { now: Instant },
}

impl Intent for IntroIntent {}

/// Effects the host acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum IntroEffect {
    /// Send this request to the description service.
    FetchDescription(DescriptionRequest),

    /// Form is valid; persist this profile.
    ProfileReady(UserProfile),
}
