// SPDX-License-Identifier: MPL-2.0
//! Persisted user settings.
//!
//! Settings live in a small TOML file under the platform configuration
//! directory. Every field is optional; missing or unreadable files fall back
//! to the defaults in [`defaults`] so the gallery always starts.

pub mod defaults;

use crate::error::Result;
use defaults::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ACTIVITY_CAPACITY, MAX_ACTIVITY_CAPACITY,
    MIN_ACTIVITY_CAPACITY, WHEEL_ZOOM_SENSITIVITY,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Multiplier applied to raw wheel delta while zooming.
    pub wheel_sensitivity: Option<f32>,

    /// Number of activity events retained in memory.
    pub activity_capacity: Option<usize>,
}

impl Config {
    /// Loads the configuration from the platform config directory.
    ///
    /// Returns defaults when the file is missing or unreadable; a corrupt
    /// settings file must never prevent startup.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Self::default(),
        }
    }

    /// Saves the configuration to the platform config directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            crate::error::Error::Config("no platform config directory".to_string())
        })?;
        self.save_to_path(&path)
    }

    /// Loads the configuration from an explicit path, falling back to
    /// defaults on any failure.
    pub fn load_from_path(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| toml::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Saves the configuration to an explicit path, creating parent
    /// directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Effective wheel sensitivity, with non-finite values rejected.
    pub fn effective_wheel_sensitivity(&self) -> f32 {
        self.wheel_sensitivity
            .filter(|s| s.is_finite())
            .unwrap_or(WHEEL_ZOOM_SENSITIVITY)
    }

    /// Effective activity capacity, clamped into the supported range.
    pub fn effective_activity_capacity(&self) -> usize {
        self.activity_capacity
            .unwrap_or(DEFAULT_ACTIVITY_CAPACITY)
            .clamp(MIN_ACTIVITY_CAPACITY, MAX_ACTIVITY_CAPACITY)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_overrides() {
        let config = Config::default();
        assert!(config.wheel_sensitivity.is_none());
        assert!(config.activity_capacity.is_none());
    }

    #[test]
    fn effective_values_fall_back_to_defaults() {
        let config = Config::default();
        assert_eq!(config.effective_wheel_sensitivity(), WHEEL_ZOOM_SENSITIVITY);
        assert_eq!(
            config.effective_activity_capacity(),
            DEFAULT_ACTIVITY_CAPACITY
        );
    }

    #[test]
    fn non_finite_sensitivity_is_rejected() {
        let config = Config {
            wheel_sensitivity: Some(f32::NAN),
            ..Config::default()
        };
        assert_eq!(config.effective_wheel_sensitivity(), WHEEL_ZOOM_SENSITIVITY);
    }

    #[test]
    fn activity_capacity_is_clamped() {
        let too_small = Config {
            activity_capacity: Some(1),
            ..Config::default()
        };
        assert_eq!(too_small.effective_activity_capacity(), MIN_ACTIVITY_CAPACITY);

        let too_large = Config {
            activity_capacity: Some(1_000_000),
            ..Config::default()
        };
        assert_eq!(too_large.effective_activity_capacity(), MAX_ACTIVITY_CAPACITY);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            wheel_sensitivity: Some(-0.002),
            activity_capacity: Some(200),
        };
        config.save_to_path(&path).expect("save config");

        let loaded = Config::load_from_path(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("does-not-exist.toml");

        assert_eq!(Config::load_from_path(&path), Config::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is { not valid toml").expect("write corrupt file");

        assert_eq!(Config::load_from_path(&path), Config::default());
    }
}
