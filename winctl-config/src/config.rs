//! The `Config` struct plus its persistence and validation methods.
//!
//! Covers:
//! - `load` / `load_from` / `save` / `save_to` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - Merging of built-in keybindings into user configs
//! - `validate` (semantic checks run after every load)

use crate::error::ConfigError;
use crate::types::{KeyBinding, LogLevel, RelaunchConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum level written to the debug log
    #[serde(default)]
    pub log_level: LogLevel,

    /// Title of the native window
    #[serde(default = "crate::defaults::window_title")]
    pub window_title: String,

    /// Initial inner width in logical pixels
    #[serde(default = "crate::defaults::window_width")]
    pub window_width: u32,

    /// Initial inner height in logical pixels
    #[serde(default = "crate::defaults::window_height")]
    pub window_height: u32,

    /// Keyboard shortcuts, each bound to a window command name
    #[serde(default = "crate::defaults::keybindings")]
    pub keybindings: Vec<KeyBinding>,

    /// Use physical key positions for keybindings instead of logical characters
    /// When enabled, Ctrl+Shift+I matches the key in the QWERTY "I" position
    /// regardless of the active keyboard layout.
    #[serde(default = "crate::defaults::bool_false")]
    pub use_physical_keys: bool,

    /// What the `reset` command relaunches
    #[serde(default)]
    pub relaunch: RelaunchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            window_title: crate::defaults::window_title(),
            window_width: crate::defaults::window_width(),
            window_height: crate::defaults::window_height(),
            keybindings: crate::defaults::keybindings(),
            use_physical_keys: crate::defaults::bool_false(),
            relaunch: RelaunchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if missing.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        log::info!(
            "Config file not found, creating default at {:?}",
            config_path
        );
        let config = Self::default();
        if let Err(e) = config.save_to(&config_path) {
            log::error!("Failed to save default config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    /// Load configuration from a specific file.
    ///
    /// A missing or empty file yields the defaults. Built-in keybindings are
    /// merged in and the result is validated before it is returned.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Config file {:?} does not exist, using defaults", path);
            return Ok(Self::default());
        }

        log::info!("Loading existing config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        // Merge in any default keybindings whose keys the user has not bound
        config.merge_default_keybindings();
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Serialize)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("winctl")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("winctl")
            } else {
                // Fallback if home directory cannot be determined
                PathBuf::from(".")
            }
        }
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero (got {}x{})",
                self.window_width, self.window_height
            )));
        }

        for (index, binding) in self.keybindings.iter().enumerate() {
            if binding.key.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "keybindings[{}]: key is empty (action '{}')",
                    index, binding.action
                )));
            }
            if binding.action.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "keybindings[{}]: action is empty (key '{}')",
                    index, binding.key
                )));
            }
        }

        if let Some(exec_path) = &self.relaunch.exec_path
            && exec_path.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "relaunch.exec_path is set but empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Merge default keybindings into the user's config.
    ///
    /// Only adds defaults whose key combination is not already bound, so a
    /// user who rebinds `F12` keeps their own action for it.
    pub(crate) fn merge_default_keybindings(&mut self) {
        let existing_keys: HashSet<String> = self
            .keybindings
            .iter()
            .map(|kb| normalize_key(&kb.key))
            .collect();

        let mut added_count = 0;
        for default_kb in crate::defaults::keybindings() {
            if !existing_keys.contains(&normalize_key(&default_kb.key)) {
                log::info!(
                    "Adding default keybinding: {} -> {}",
                    default_kb.key,
                    default_kb.action
                );
                self.keybindings.push(default_kb);
                added_count += 1;
            }
        }

        if added_count > 0 {
            log::info!(
                "Merged {} default keybinding(s) into user config",
                added_count
            );
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.split('+')
        .map(|part| part.trim().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.keybindings.len(), 2);
    }

    #[test]
    fn test_merge_skips_rebound_keys() {
        let mut config = Config {
            keybindings: vec![KeyBinding::new("f12", "maximize")],
            ..Config::default()
        };
        config.merge_default_keybindings();

        assert_eq!(config.keybindings.len(), 2);
        assert_eq!(config.keybindings[0], KeyBinding::new("f12", "maximize"));
        assert_eq!(
            config.keybindings[1],
            KeyBinding::new("Ctrl+Shift+I", "toggle-devtools")
        );
    }

    #[test]
    fn test_normalize_key_ignores_case_and_spacing() {
        assert_eq!(normalize_key("Ctrl + Shift + I"), normalize_key("ctrl+shift+i"));
    }

    #[test]
    fn test_zero_window_size_rejected() {
        let config = Config {
            window_width: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
