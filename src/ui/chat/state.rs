//! State for a local chat thread.

use std::collections::BTreeMap;
use std::time::{Duration, Instant, SystemTime};

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// How long a press must be held on a message before the reaction picker opens.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// Reactions offered by the picker.
pub const REACTIONS: [&str; 5] = ["❤️", "👍", "😂", "😮", "🎉"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: SystemTime,
}

/// A press on a message that becomes a long press at `fires_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPress {
    pub message_id: u64,
    pub fires_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub friend_id: u64,
    pub friend_name: String,
    /// Display order.
    pub messages: Vec<Message>,
    pub draft: String,
    /// At most one reaction per message.
    pub reactions: BTreeMap<u64, String>,
    pub welcome_open: bool,
    pub press: Option<PendingPress>,
    /// Message whose reaction picker is showing.
    pub active_picker: Option<u64>,
    pub next_id: u64,
    pub long_press: Duration,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            friend_id: 0,
            friend_name: String::new(),
            messages: Vec::new(),
            draft: String::new(),
            reactions: BTreeMap::new(),
            welcome_open: true,
            press: None,
            active_picker: None,
            next_id: 1,
            long_press: DEFAULT_LONG_PRESS,
        }
    }
}

impl UiState for ChatState {}

impl ChatState {
    pub fn find(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn reaction(&self, id: u64) -> Option<&str> {
        self.reactions.get(&id).map(String::as_str)
    }

    /// Send is enabled only for a draft with visible text.
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Append a message and return its id.
    pub(crate) fn push(&mut self, sender: Sender, content: String, timestamp: SystemTime) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            sender,
            content,
            timestamp,
        });
        id
    }
}

/// Greeting addressed to `name`.
pub fn greeting(name: &str) -> String {
    format!("안녕하세요, {}님!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut state = ChatState::default();
        let now = SystemTime::now();
        let a = state.push(Sender::Me, "a".to_string(), now);
        let b = state.push(Sender::Other, "b".to_string(), now);
        assert!(b > a);
        assert_eq!(state.find(b).map(|m| m.sender), Some(Sender::Other));
    }

    #[test]
    fn whitespace_draft_cannot_be_sent() {
        let state = ChatState {
            draft: "  \n ".to_string(),
            ..Default::default()
        };
        assert!(!state.can_send());
    }
}
