//! User and candidate profiles plus the local profile store.

mod model;
mod store;

pub use model::{demo_candidates, CandidateProfile, UserProfile};
pub use store::{
    load_or_seed, JsonFileStore, MemoryProfileStore, ProfileStore, StoreError, PROFILE_KEY,
};
