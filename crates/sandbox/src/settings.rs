//! Sandbox settings loaded from `silicate_settings.json`.
//!
//! Every field is optional in the file; missing fields keep their defaults.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use tile_display::{TileDisplayAssetPaths, TileDisplayConfig};

pub const SETTINGS_FILE: &str = "silicate_settings.json";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxSettings {
    /// World generation seed.
    pub seed: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub display: TileDisplayConfig,
    pub ui_assets: TileDisplayAssetPaths,
}

impl Default for SandboxSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            window_width: 1280.0,
            window_height: 720.0,
            display: TileDisplayConfig::default(),
            ui_assets: TileDisplayAssetPaths::default(),
        }
    }
}

/// Errors that can occur while reading the settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid settings JSON.
    Parse(serde_json::Error),
}

impl SettingsError {
    /// A missing file is expected on first launch.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "Invalid settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

pub fn parse_settings(json: &str) -> Result<SandboxSettings, SettingsError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_settings(path: impl AsRef<Path>) -> Result<SandboxSettings, SettingsError> {
    let json = std::fs::read_to_string(path)?;
    parse_settings(&json)
}

/// Load settings from `path`, falling back to defaults on any error.
pub fn load_settings_or_default(path: impl AsRef<Path>) -> SandboxSettings {
    let path = path.as_ref();
    match load_settings(path) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(err) if err.is_not_found() => SandboxSettings::default(),
        Err(err) => {
            warn!("Ignoring {}: {err}", path.display());
            SandboxSettings::default()
        }
    }
}
