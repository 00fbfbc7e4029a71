//! Navigation targets emitted by the engines.

use std::fmt;

/// A screen the host should navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Friend profile screen.
    Profile(u64),
    /// Chat thread with a friend.
    Chat(u64),
}

impl Route {
    /// The friend this route points at.
    pub fn friend_id(&self) -> u64 {
        match self {
            Self::Profile(id) | Self::Chat(id) => *id,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(id) => write!(f, "profile/{}", id),
            Self::Chat(id) => write!(f, "chat/{}", id),
        }
    }
}
