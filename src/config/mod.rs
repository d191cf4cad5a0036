// SPDX-License-Identifier: MPL-2.0
//! This module handles the storefront configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[slideshow]` - Image set naming and autoplay interval
//! - `[gallery]` - Lazy-load proximity margin
//! - `[orders]` - Backend origin, order endpoint and status page
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `CROWN_STOREFRONT_CONFIG_DIR`
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use crown_storefront::config;
//!
//! let (mut config, _warning) = config::load();
//! config.slideshow.interval_ms = 6000;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::gallery::ImageSetSpec;
use crate::domain::ui::{AutoplayInterval, RootMargin};
use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Portfolio image set and autoplay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SlideshowConfig {
    /// Folder of full-resolution images, including the trailing slash.
    pub full_folder: String,

    /// Folder of thumbnails. Full images are used when empty.
    pub thumb_folder: String,

    /// Filename prefix.
    pub basename: String,

    /// Number of images; files are numbered from 1.
    pub count: u32,

    /// File extension without the dot.
    pub extension: String,

    /// Autoplay interval in milliseconds.
    pub interval_ms: u64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            full_folder: DEFAULT_FULL_FOLDER.to_string(),
            thumb_folder: DEFAULT_THUMB_FOLDER.to_string(),
            basename: DEFAULT_BASENAME.to_string(),
            count: DEFAULT_IMAGE_COUNT,
            extension: DEFAULT_EXTENSION.to_string(),
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
        }
    }
}

impl SlideshowConfig {
    /// Returns the naming template used to generate the image set.
    #[must_use]
    pub fn image_set_spec(&self) -> ImageSetSpec {
        ImageSetSpec {
            full_folder: self.full_folder.clone(),
            thumb_folder: Some(self.thumb_folder.clone()).filter(|folder| !folder.is_empty()),
            basename: self.basename.clone(),
            count: self.count,
            extension: self.extension.clone(),
        }
    }

    /// Returns the clamped autoplay interval.
    #[must_use]
    pub fn interval(&self) -> AutoplayInterval {
        AutoplayInterval::from_millis(self.interval_ms)
    }
}

/// Thumbnail gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Pixels beyond the viewport at which thumbnails begin loading.
    pub root_margin_px: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
        }
    }
}

impl GalleryConfig {
    /// Returns the clamped root margin.
    #[must_use]
    pub fn root_margin(&self) -> RootMargin {
        RootMargin::new(self.root_margin_px)
    }
}

/// Order submission settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrdersConfig {
    /// Origin the HTTP transport resolves the endpoint against.
    pub base_url: String,

    /// Order intake endpoint path.
    pub endpoint: String,

    /// Status page the browser is redirected to.
    pub status_page: String,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ORDER_ENDPOINT.to_string(),
            status_page: DEFAULT_STATUS_PAGE.to_string(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Storefront configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub orders: OrdersConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be loaded, the defaults are returned with a warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default config"
                    );
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.slideshow.count = 3;
        config.slideshow.thumb_folder = String::new();
        config.orders.base_url = "https://shop.example".to_string();

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slideshow]\ncount = 4\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.slideshow.count, 4);
        assert_eq!(loaded.slideshow.interval_ms, DEFAULT_AUTOPLAY_INTERVAL_MS);
        assert_eq!(loaded.gallery.root_margin_px, DEFAULT_ROOT_MARGIN_PX);
        assert_eq!(loaded.orders.endpoint, DEFAULT_ORDER_ENDPOINT);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn load_with_override_without_file_uses_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn interval_is_clamped() {
        let mut config = SlideshowConfig::default();
        config.interval_ms = 1;
        assert_eq!(config.interval().as_millis(), MIN_AUTOPLAY_INTERVAL_MS);
    }
}
