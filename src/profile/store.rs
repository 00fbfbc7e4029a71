//! Local profile storage.
//!
//! The profile lives under a single key of a small JSON key-value file.
//! Callers depend on [`ProfileStore`] so engines and forms can be tested
//! with [`MemoryProfileStore`] instead of touching disk.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use thiserror::Error;

use super::model::UserProfile;

/// Key the profile is stored under.
pub const PROFILE_KEY: &str = "userProfile";

/// Errors that can occur when reading or writing the profile store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored value under '{key}' is not a profile: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode profile: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Load/save access to the user's profile.
pub trait ProfileStore: Send + Sync {
    /// Read the stored profile. `Ok(None)` when the key is absent.
    fn load(&self) -> Result<Option<UserProfile>, StoreError>;

    /// Overwrite the stored profile wholesale.
    fn save(&self, profile: &UserProfile) -> Result<(), StoreError>;
}

/// Load the stored profile, seeding the default one when absent.
pub fn load_or_seed(store: &dyn ProfileStore) -> Result<UserProfile, StoreError> {
    if let Some(profile) = store.load()? {
        return Ok(profile);
    }

    let profile = UserProfile::default();
    store.save(&profile)?;
    tracing::info!(name = %profile.name, "Seeded default profile");
    Ok(profile)
}

/// JSON file holding a flat object of keys; the profile is one of them.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: PROFILE_KEY.to_string(),
        }
    }

    /// Default location: `<data_dir>/matchmate/store.json`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("matchmate").join("store.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        let mut map = self.read_map()?;
        let Some(value) = map.remove(&self.key) else {
            return Ok(None);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::Decode {
                key: self.key.clone(),
                source: e,
            })
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Parse { path, source }) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %source,
                    "Store is unreadable, overwriting it"
                );
                Map::new()
            }
            Err(e) => return Err(e),
        };
        let value = serde_json::to_value(profile).map_err(StoreError::Encode)?;
        map.insert(self.key.clone(), value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
            }
        }

        let content = serde_json::to_string_pretty(&map).map_err(StoreError::Encode)?;
        // Readers never observe a partially written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| self.write_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.write_err(e))?;

        tracing::info!(path = %self.path.display(), "Saved profile");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    slot: Mutex<Option<UserProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            slot: Mutex::new(Some(profile)),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        *self.slot.lock() = Some(profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_seeds_once() {
        let store = MemoryProfileStore::new();
        assert!(store.load().unwrap().is_none());

        let seeded = load_or_seed(&store).unwrap();
        assert_eq!(seeded, UserProfile::default());
        assert_eq!(store.load().unwrap(), Some(UserProfile::default()));
    }

    #[test]
    fn memory_store_keeps_existing_profile() {
        let custom = UserProfile {
            name: "Mina".to_string(),
            ..UserProfile::default()
        };
        let store = MemoryProfileStore::with_profile(custom.clone());
        assert_eq!(load_or_seed(&store).unwrap(), custom);
    }
}
