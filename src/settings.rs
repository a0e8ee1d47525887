// Chunk: docs/chunks/settings_persistence - Settings persistence

//! Settings persistence for the overlay.
//!
//! This module provides serialization and deserialization of the four
//! externally visible settings, allowing the host to save them on change
//! and restore them on the next launch.
//!
//! ## File Location
//!
//! The settings file is stored under the platform data directory, e.g.
//! `~/Library/Application Support/linetail/settings.json` on macOS.
//!
//! ## Schema Version
//!
//! The settings file includes a schema version. If the version doesn't
//! match the current code, the file is discarded (graceful degradation to
//! defaults). The same applies to unreadable or unparsable files - a
//! malformed value (say, a negative delay hand-edited into the JSON) fails
//! deserialization and the loader falls back to defaults rather than
//! rejecting loudly.
//!
//! ## Propagation
//!
//! Loaded settings become a [`ConfigPatch`] and go through normal
//! resolution, so falsy fields (zero threshold, empty marker text) fall
//! back to defaults like any other source. Live settings edits are
//! debounced by [`SettingsDebouncer`](crate::settings_debouncer::SettingsDebouncer)
//! before being broadcast into the running editors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use linetail_config::{resolve, Config, ConfigPatch};

/// Current schema version for the settings file.
///
/// Increment this when making breaking changes to the settings format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the data directory.
const APP_NAME: &str = "linetail";

/// Settings file name.
const SETTINGS_FILENAME: &str = "settings.json";

/// The four externally visible settings.
///
/// Mirrors [`Config`] field for field; this is the value the host's
/// settings UI edits and the persistence layer stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub recompute_delay_ms: u64,
    pub length_threshold: u32,
    pub long_marker_text: String,
    pub short_marker_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            recompute_delay_ms: config.recompute_delay_ms,
            length_threshold: config.length_threshold,
            long_marker_text: config.long_marker_text,
            short_marker_text: config.short_marker_text,
        }
    }
}

impl Settings {
    /// Converts the settings into one resolver source.
    pub fn to_patch(&self) -> ConfigPatch {
        ConfigPatch {
            recompute_delay_ms: Some(self.recompute_delay_ms),
            length_threshold: Some(self.length_threshold),
            long_marker_text: Some(self.long_marker_text.clone()),
            short_marker_text: Some(self.short_marker_text.clone()),
        }
    }

    /// Resolves the settings into a full configuration.
    ///
    /// Falsy fields fall back to defaults through the normal merge policy.
    pub fn resolve(&self) -> Config {
        resolve(&[self.to_patch()])
    }
}

// =============================================================================
// Serializable Data Types
// =============================================================================

/// Serializable representation of the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsData {
    /// Schema version for forward compatibility.
    schema_version: u32,
    recompute_delay_ms: u64,
    length_threshold: u32,
    long_marker_text: String,
    short_marker_text: String,
}

impl SettingsData {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            recompute_delay_ms: settings.recompute_delay_ms,
            length_threshold: settings.length_threshold,
            long_marker_text: settings.long_marker_text.clone(),
            short_marker_text: settings.short_marker_text.clone(),
        }
    }

    fn into_settings(self) -> Settings {
        Settings {
            recompute_delay_ms: self.recompute_delay_ms,
            length_threshold: self.length_threshold,
            long_marker_text: self.long_marker_text,
            short_marker_text: self.short_marker_text,
        }
    }
}

// =============================================================================
// Settings File Path
// =============================================================================

/// Returns the path to the settings file.
///
/// Returns `None` if the platform data directory cannot be determined.
/// Creates the `linetail` subdirectory if it doesn't exist.
pub fn settings_file_path() -> Option<PathBuf> {
    let data_dir = dirs::data_dir()?;
    let app_dir = data_dir.join(APP_NAME);

    if !app_dir.exists() {
        if let Err(e) = fs::create_dir_all(&app_dir) {
            eprintln!("Failed to create settings directory: {}", e);
            return None;
        }
    }

    Some(app_dir.join(SETTINGS_FILENAME))
}

// =============================================================================
// Save Settings
// =============================================================================

/// Saves the settings to disk.
///
/// Uses atomic write (write to temp file, then rename) to prevent
/// corruption.
///
/// # Errors
///
/// Returns an error if:
/// - The settings directory cannot be determined or created
/// - The settings file cannot be written
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    let path = settings_file_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine settings file path",
        )
    })?;
    save_settings_to(settings, &path)
}

fn save_settings_to(settings: &Settings, path: &Path) -> io::Result<()> {
    let data = SettingsData::from_settings(settings);
    let json = serde_json::to_string_pretty(&data)?;

    // Atomic write: write to temp file, then rename
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

// =============================================================================
// Load Settings
// =============================================================================

/// Loads the settings from disk.
///
/// Returns `None` if:
/// - The settings file doesn't exist
/// - The settings file cannot be read or parsed
/// - The schema version doesn't match (indicating a breaking change)
///
/// This function is designed for graceful degradation - any error results
/// in returning `None` so the host can fall back to defaults.
pub fn load_settings() -> Option<Settings> {
    let path = settings_file_path()?;
    load_settings_from(&path)
}

fn load_settings_from(path: &Path) -> Option<Settings> {
    if !path.exists() {
        return None;
    }

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read settings file: {}", e);
            return None;
        }
    };

    let data: SettingsData = match serde_json::from_str(&contents) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to parse settings file: {}", e);
            return None;
        }
    };

    if data.schema_version != SCHEMA_VERSION {
        eprintln!(
            "Settings schema version mismatch (expected {}, got {})",
            SCHEMA_VERSION, data.schema_version
        );
        return None;
    }

    Some(data.into_settings())
}
