//! State for the friends list.

use std::time::{Duration, Instant};

use crate::ui::mvi::UiState;

/// Hold on an open profile card this long to jump to the full profile.
pub const DEFAULT_HOLD_DURATION: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: u64,
    pub name: String,
    pub presence: Presence,
    /// Human-readable "last seen", e.g. "방금 전".
    pub last_seen: String,
}

impl Friend {
    pub fn new(id: u64, name: &str, presence: Presence, last_seen: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            presence,
            last_seen: last_seen.to_string(),
        }
    }
}

/// Sample friends list used by the CLI demo.
pub fn demo_friends() -> Vec<Friend> {
    vec![
        Friend::new(1, "또컴공이야", Presence::Online, "방금 전"),
        Friend::new(2, "라이언", Presence::Offline, "1시간 전"),
        Friend::new(3, "어피치", Presence::Online, "방금 전"),
        Friend::new(4, "무지", Presence::Offline, "2시간 전"),
    ]
}

/// Friend's name, or a numbered placeholder for unknown ids.
pub fn display_name(friends: &[Friend], id: u64) -> String {
    friends
        .iter()
        .find(|f| f.id == id)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| format!("친구 #{}", id))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FriendsState {
    pub friends: Vec<Friend>,
    /// Friend whose profile card is open.
    pub selected: Option<u64>,
    /// A hold in progress completes at this instant.
    pub hold_until: Option<Instant>,
    pub hold_duration: Duration,
}

impl Default for FriendsState {
    fn default() -> Self {
        Self {
            friends: Vec::new(),
            selected: None,
            hold_until: None,
            hold_duration: DEFAULT_HOLD_DURATION,
        }
    }
}

impl UiState for FriendsState {}

impl FriendsState {
    pub fn find(&self, id: u64) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.and_then(|id| self.find(id))
    }
}
