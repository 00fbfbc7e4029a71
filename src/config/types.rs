use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::swipe::SwipeSettings;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub friends: FriendsConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Toast behaviour of the notification center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds a toast stays up before expiring (default: 5).
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

/// Gesture tuning for the matching deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Drag distance in logical px that counts as a swipe (default: 100).
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Exit animation target magnitude (default: 250).
    #[serde(default = "default_exit_offset")]
    pub exit_offset: f32,
    /// Pause before the deck advances (default: 300).
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Degrees of card rotation per px of drag (default: 0.05).
    #[serde(default = "default_rotation_factor")]
    pub rotation_factor: f32,
}

/// Introduction form limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Maximum selected tags (default: 5).
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
    /// Seconds the tag-limit warning stays up (default: 3).
    #[serde(default = "default_warning_seconds")]
    pub warning_seconds: u64,
}

/// Chat thread gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Press length that opens the reaction picker (default: 500).
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
}

/// Friends list gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendsConfig {
    /// Hold on a profile card before opening the full profile (default: 700).
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

/// Endpoints of the external generation services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Image tagging endpoint (multipart upload).
    #[serde(default = "default_tag_url")]
    pub tag_url: String,
    /// Description generation endpoint (JSON).
    #[serde(default = "default_description_url")]
    pub description_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// `options.maxLength` sent with description requests (default: 500).
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    /// `options.language` sent with description requests (default: "ko").
    #[serde(default = "default_language")]
    pub language: String,
}

/// Location of the local profile store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Overrides `<data_dir>/matchmate/store.json`.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

fn default_toast_seconds() -> u64 {
    5
}

fn default_threshold() -> f32 {
    100.0
}

fn default_exit_offset() -> f32 {
    250.0
}

fn default_settle_delay_ms() -> u64 {
    300
}

fn default_rotation_factor() -> f32 {
    0.05
}

fn default_max_tags() -> usize {
    5
}

fn default_warning_seconds() -> u64 {
    3
}

fn default_long_press_ms() -> u64 {
    500
}

fn default_hold_ms() -> u64 {
    700
}

fn default_tag_url() -> String {
    "http://127.0.0.1:8000/api/vlm/tags".to_string()
}

fn default_description_url() -> String {
    "http://127.0.0.1:8000/api/llm/generate".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_length() -> u32 {
    500
}

fn default_language() -> String {
    "ko".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_seconds: default_toast_seconds(),
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            exit_offset: default_exit_offset(),
            settle_delay_ms: default_settle_delay_ms(),
            rotation_factor: default_rotation_factor(),
        }
    }
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
            warning_seconds: default_warning_seconds(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
        }
    }
}

impl Default for FriendsConfig {
    fn default() -> Self {
        Self {
            hold_ms: default_hold_ms(),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            tag_url: default_tag_url(),
            description_url: default_description_url(),
            timeout_seconds: default_timeout_seconds(),
            max_length: default_max_length(),
            language: default_language(),
        }
    }
}

impl NotificationConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

impl IntroConfig {
    pub fn warning_duration(&self) -> Duration {
        Duration::from_secs(self.warning_seconds)
    }
}

impl ChatConfig {
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}

impl FriendsConfig {
    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

impl From<&SwipeConfig> for SwipeSettings {
    fn from(config: &SwipeConfig) -> Self {
        Self {
            threshold: config.threshold,
            exit_offset: config.exit_offset,
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            rotation_factor: config.rotation_factor,
        }
    }
}
