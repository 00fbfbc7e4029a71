//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use matchmate::config::{Config, ServicesConfig};
use std::path::PathBuf;
use tempfile::TempDir;

/// Services config pointing both endpoints at `base_url`.
pub fn services_for(base_url: &str) -> ServicesConfig {
    ServicesConfig {
        tag_url: format!("{}/api/vlm/tags", base_url),
        description_url: format!("{}/api/llm/generate", base_url),
        timeout_seconds: 5,
        ..ServicesConfig::default()
    }
}

/// Write `content` as `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Default config with the profile store inside `dir`.
pub fn config_with_store(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.profile.store_path = Some(dir.path().join("store.json"));
    config
}
