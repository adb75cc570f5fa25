// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[preferences]` - Free-form string key/value pairs (e.g. the display language)
//! - `[window]` - Initial window size
//! - `[scroll]` - In-page navigation animation
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.window.width = Some(1280.0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be parsed.
pub const WARNING_LOAD_FAILED: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Window geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Initial window height in logical pixels.
    #[serde(default = "default_window_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowConfig {
    /// Window size with missing values defaulted and minimums enforced.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let width = self
            .width
            .filter(|w| w.is_finite())
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .max(MIN_WINDOW_WIDTH);
        let height = self
            .height
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .max(MIN_WINDOW_HEIGHT);
        (width, height)
    }
}

/// In-page navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Duration of the smooth scroll to a section, in milliseconds.
    #[serde(
        default = "default_scroll_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_ms: Option<u64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            animation_ms: default_scroll_animation_ms(),
        }
    }
}

impl ScrollConfig {
    /// Animation duration clamped to the supported range.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        let millis = self
            .animation_ms
            .unwrap_or(DEFAULT_SCROLL_ANIMATION_MS)
            .min(MAX_SCROLL_ANIMATION_MS);
        Duration::from_millis(millis)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Persisted key/value preferences.
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,

    /// Window geometry settings.
    #[serde(default)]
    pub window: WindowConfig,

    /// In-page navigation settings.
    #[serde(default)]
    pub scroll: ScrollConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn default_scroll_animation_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_ANIMATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "settings file unreadable, using defaults");
                    return (Config::default(), Some(WARNING_LOAD_FAILED.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config
            .preferences
            .insert("portfolio-language".to_string(), "es".to_string());
        config.window.width = Some(1280.0);
        config.scroll.animation_ms = Some(200);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write corrupt file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(WARNING_LOAD_FAILED));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[preferences]\nportfolio-language = \"en\"\n")
            .expect("partial config parses");
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.scroll, ScrollConfig::default());
        assert_eq!(
            config.preferences.get("portfolio-language").map(String::as_str),
            Some("en")
        );
    }

    #[test]
    fn window_size_enforces_minimums() {
        let window = WindowConfig {
            width: Some(100.0),
            height: Some(f32::NAN),
        };
        assert_eq!(window.size(), (MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn scroll_duration_is_clamped() {
        let scroll = ScrollConfig {
            animation_ms: Some(60_000),
        };
        assert_eq!(
            scroll.animation_duration(),
            Duration::from_millis(MAX_SCROLL_ANIMATION_MS)
        );
        assert_eq!(
            ScrollConfig { animation_ms: None }.animation_duration(),
            Duration::from_millis(DEFAULT_SCROLL_ANIMATION_MS)
        );
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
