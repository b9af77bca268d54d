//! Settings persistence: a JSON blob under a fixed key in a key-value store.
//!
//! The store is deliberately dumb string storage; all schema knowledge lives
//! in [`load_settings`] and friends. A malformed or partially written blob
//! never fails a load: the deep merge recovers what it can and the rest
//! falls back to defaults.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::merge::merge_values;
use super::model::Settings;
use super::theme::{preset_colors, ThemePreset};

/// Storage key the settings blob lives under, shared with the web widget.
pub const SETTINGS_KEY: &str = "arabicKeyboardSettings";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no user config directory available")]
    NoConfigDir,

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// String key-value storage for persisted blobs.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and embedders with their own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` per entry under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens the store in the per-user config directory.
    pub fn new() -> Result<Self, StoreError> {
        let root = dirs::config_dir().ok_or(StoreError::NoConfigDir)?.join("lawha");
        Self::with_root(root)
    }

    /// Opens the store at an explicit root directory.
    pub fn with_root(root: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Loads settings from the store, merging the stored blob over defaults.
/// Read failures and malformed blobs fall back to defaults.
pub fn load_settings(store: &impl SettingsStore) -> Settings {
    match store.get(SETTINGS_KEY) {
        Ok(Some(blob)) => import_settings(&blob),
        Ok(None) => Settings::default(),
        Err(err) => {
            log::warn!("failed to read stored settings: {err}");
            Settings::default()
        }
    }
}

/// Serializes the settings and writes them under the fixed key.
pub fn save_settings(store: &mut impl SettingsStore, settings: &Settings) -> Result<(), StoreError> {
    let blob = serde_json::to_string(settings)?;
    store.set(SETTINGS_KEY, &blob)
}

/// Removes the persisted blob and returns the defaults.
pub fn reset_settings(store: &mut impl SettingsStore) -> Result<Settings, StoreError> {
    store.remove(SETTINGS_KEY)?;
    Ok(Settings::default())
}

/// Pretty JSON for sharing settings between installations.
pub fn export_settings(settings: &Settings) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Parses a JSON blob and merges it over defaults.
/// Malformed input falls back to defaults.
pub fn import_settings(json: &str) -> Settings {
    let overrides = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("malformed settings blob, using defaults: {err}");
            return Settings::default();
        }
    };
    let defaults = match serde_json::to_value(Settings::default()) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to serialize default settings: {err}");
            return Settings::default();
        }
    };
    match serde_json::from_value(merge_values(defaults, overrides)) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("stored settings do not match the schema, using defaults: {err}");
            Settings::default()
        }
    }
}

/// Switches the theme preset, replacing the colors with the preset's table.
/// `Custom` keeps whatever colors are currently set.
pub fn apply_theme_preset(settings: &mut Settings, preset: ThemePreset) {
    settings.theme.preset = preset;
    if preset != ThemePreset::Custom {
        settings.theme.colors = preset_colors(preset);
    }
}
