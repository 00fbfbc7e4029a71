mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    ChatConfig, Config, FriendsConfig, IntroConfig, NotificationConfig, ProfileConfig,
    ServicesConfig, SwipeConfig,
};
