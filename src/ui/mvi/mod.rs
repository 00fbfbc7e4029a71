//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every interaction engine in this crate is built from these traits so the
//! host UI only ever dispatches intents and renders state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │          └──→ Effects ──→ Host (navigate, animate, call services)
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of engine state
//! - **Intent**: User actions or timer ticks
//! - **Reducer**: Pure function that transforms state and emits effects
//! - **Effect**: Instruction for the host; the engine never performs it itself

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
