//! Local chat thread: draft and send, a welcome greeting, and long-press
//! reactions on the other party's messages.
//!
//! Messages never leave the process. Long presses resolve on
//! [`ChatThread::tick`], like the other engines' timers.

mod intent;
mod reducer;
mod state;

use std::time::{Duration, Instant, SystemTime};

pub use intent::{ChatEffect, ChatIntent};
pub use reducer::ChatReducer;
pub use state::{greeting, ChatState, Message, PendingPress, Sender, DEFAULT_LONG_PRESS, REACTIONS};

use crate::ui::mvi::Reducer;

#[derive(Debug, Default)]
pub struct ChatThread {
    state: ChatState,
}

impl ChatThread {
    /// Open a thread with `friend_name`. The friend has already greeted
    /// `my_name`, and the welcome dialog is showing.
    pub fn new(
        friend_id: u64,
        friend_name: impl Into<String>,
        my_name: &str,
        long_press: Duration,
        opened_at: SystemTime,
    ) -> Self {
        let mut state = ChatState {
            friend_id,
            friend_name: friend_name.into(),
            long_press,
            ..Default::default()
        };
        state.push(Sender::Other, greeting(my_name), opened_at);
        Self { state }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn dispatch(&mut self, intent: ChatIntent) -> Vec<ChatEffect> {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = ChatReducer::reduce(state, intent);
        self.state = next;
        effects
    }

    pub fn edit_draft(&mut self, draft: impl Into<String>) {
        self.dispatch(ChatIntent::EditDraft(draft.into()));
    }

    /// Send the draft. Returns the new message id, or `None` for a blank draft.
    pub fn send(&mut self, at: SystemTime) -> Option<u64> {
        appended(self.dispatch(ChatIntent::Send { at }))
    }

    pub fn confirm_welcome(&mut self, at: SystemTime) -> Option<u64> {
        appended(self.dispatch(ChatIntent::ConfirmWelcome { at }))
    }

    pub fn dismiss_welcome(&mut self) {
        self.dispatch(ChatIntent::DismissWelcome);
    }

    pub fn press_start(&mut self, message_id: u64, now: Instant) {
        self.dispatch(ChatIntent::PressStart { message_id, now });
    }

    pub fn press_end(&mut self) {
        self.dispatch(ChatIntent::PressEnd);
    }

    /// Returns the message whose picker opened on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<u64> {
        self.dispatch(ChatIntent::Tick { now })
            .into_iter()
            .find_map(|effect| match effect {
                ChatEffect::PickerOpened { message_id } => Some(message_id),
                ChatEffect::MessageAppended { .. } | ChatEffect::Reacted { .. } => None,
            })
    }

    /// Returns whether the reaction was recorded.
    pub fn react(&mut self, message_id: u64, reaction: impl Into<String>) -> bool {
        self.dispatch(ChatIntent::React {
            message_id,
            reaction: reaction.into(),
        })
        .contains(&ChatEffect::Reacted { message_id })
    }

    pub fn close_picker(&mut self) {
        self.dispatch(ChatIntent::ClosePicker);
    }
}

fn appended(effects: Vec<ChatEffect>) -> Option<u64> {
    effects.into_iter().find_map(|effect| match effect {
        ChatEffect::MessageAppended { id } => Some(id),
        ChatEffect::PickerOpened { .. } | ChatEffect::Reacted { .. } => None,
    })
}
