// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Only the seek steps are user-tunable. The gesture suppression windows are
//! fixed behavioral constants (see [`defaults`]) and deliberately have no
//! configuration fields.
//!
//! # Examples
//!
//! ```no_run
//! use cinebar::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.skip_step_secs = Some(15.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{DEFAULT_ARROW_SEEK_STEP_SECS, DEFAULT_SKIP_STEP_SECS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Cinebar";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Step in seconds for the skip buttons and the J/L keys.
    #[serde(default)]
    pub skip_step_secs: Option<f64>,
    /// Step in seconds for arrow-key seeking.
    #[serde(default)]
    pub arrow_seek_step_secs: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_step_secs: Some(DEFAULT_SKIP_STEP_SECS),
            arrow_seek_step_secs: Some(DEFAULT_ARROW_SEEK_STEP_SECS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

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
    fn default_config_uses_default_steps() {
        let config = Config::default();
        assert_eq!(config.skip_step_secs, Some(DEFAULT_SKIP_STEP_SECS));
        assert_eq!(
            config.arrow_seek_step_secs,
            Some(DEFAULT_ARROW_SEEK_STEP_SECS)
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            skip_step_secs: Some(15.0),
            arrow_seek_step_secs: Some(2.5),
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.skip_step_secs, Some(15.0));
        assert_eq!(loaded.arrow_seek_step_secs, Some(2.5));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("does_not_exist.toml");
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn invalid_toml_falls_back_to_default() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is not toml {{").expect("Failed to write file");

        let loaded = load_from_path(&path).expect("Load should not fail on parse errors");
        assert_eq!(loaded.skip_step_secs, Some(DEFAULT_SKIP_STEP_SECS));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "skip_step_secs = 20.0\n").expect("Failed to write file");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.skip_step_secs, Some(20.0));
        assert_eq!(loaded.arrow_seek_step_secs, None);
    }
}
