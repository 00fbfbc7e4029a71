//! Interaction engines, each a reducer over its own state.

pub mod chat;
pub mod friends;
pub mod intro;
pub mod mvi;
pub mod notifications;
pub mod swipe;
