//! Reducer for chat thread state transitions.

use crate::ui::mvi::Reducer;

use super::intent::{ChatEffect, ChatIntent};
use super::state::{greeting, ChatState, PendingPress, Sender, REACTIONS};

pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatState;
    type Intent = ChatIntent;
    type Effect = ChatEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            ChatIntent::EditDraft(draft) => {
                state.draft = draft;
                (state, Vec::new())
            }

            ChatIntent::Send { at } => {
                let content = state.draft.trim().to_string();
                if content.is_empty() {
                    return (state, Vec::new());
                }
                let id = state.push(Sender::Me, content, at);
                state.draft.clear();
                (state, vec![ChatEffect::MessageAppended { id }])
            }

            ChatIntent::ConfirmWelcome { at } => {
                if !state.welcome_open {
                    return (state, Vec::new());
                }
                state.welcome_open = false;
                // The greeting bypasses the draft.
                let id = state.push(Sender::Me, greeting(&state.friend_name), at);
                (state, vec![ChatEffect::MessageAppended { id }])
            }

            ChatIntent::DismissWelcome => {
                state.welcome_open = false;
                (state, Vec::new())
            }

            ChatIntent::PressStart { message_id, now } => {
                match state.find(message_id).map(|m| m.sender) {
                    Some(Sender::Other) => {
                        state.press = Some(PendingPress {
                            message_id,
                            fires_at: now + state.long_press,
                        });
                    }
                    Some(Sender::Me) => {}
                    None => tracing::debug!(message_id, "Press on unknown message ignored"),
                }
                (state, Vec::new())
            }

            ChatIntent::PressEnd => {
                state.press = None;
                (state, Vec::new())
            }

            ChatIntent::Tick { now } => match state.press {
                Some(press) if now >= press.fires_at => {
                    state.press = None;
                    state.active_picker = Some(press.message_id);
                    (
                        state,
                        vec![ChatEffect::PickerOpened {
                            message_id: press.message_id,
                        }],
                    )
                }
                _ => (state, Vec::new()),
            },

            ChatIntent::React {
                message_id,
                reaction,
            } => {
                if state.active_picker != Some(message_id)
                    || !REACTIONS.contains(&reaction.as_str())
                {
                    tracing::debug!(message_id, %reaction, "Reaction ignored");
                    return (state, Vec::new());
                }
                state.reactions.insert(message_id, reaction);
                state.active_picker = None;
                (state, vec![ChatEffect::Reacted { message_id }])
            }

            ChatIntent::ClosePicker => {
                state.active_picker = None;
                (state, Vec::new())
            }
        }
    }
}
