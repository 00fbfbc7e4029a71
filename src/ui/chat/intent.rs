//! Intents and effects for a chat thread.

use std::time::{Instant, SystemTime};

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ChatIntent {
    EditDraft(String),

    /// Send the trimmed draft. Empty drafts are ignored.
    Send { at: SystemTime },

    /// Confirm the welcome dialog, which sends a greeting.
    ConfirmWelcome { at: SystemTime },

    DismissWelcome,

    /// Press started on a message. Only the other party's messages react.
    PressStart { message_id: u64, now: Instant },

    /// Press released or left before it became a long press.
    PressEnd,

    /// Timer tick driving long-press detection.
    Tick { now: Instant },

    /// Pick a reaction from the open picker.
    React { message_id: u64, reaction: String },

    ClosePicker,
}

impl Intent for ChatIntent {}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatEffect {
    /// A message was appended; the host scrolls to the bottom.
    MessageAppended { id: u64 },

    /// Long press completed on `message_id`.
    PickerOpened { message_id: u64 },

    Reacted { message_id: u64 },
}
