// Configuration module for chanhop
// This module handles loading and parsing configuration from ~/.config/chanhop/config.toml

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub switcher: SwitcherConfig,
    pub input: InputConfig,
}

/// Switcher surface configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Maximum number of suggestions the provider returns
    pub max_suggestions: usize,
    /// Quit after a successful switch, printing the target to stdout
    pub exit_on_switch: bool,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            exit_on_switch: true,
        }
    }
}

/// Text input configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Save the purpose editor with Ctrl+Enter instead of plain Enter
    pub send_on_ctrl_enter: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            send_on_ctrl_enter: false,
        }
    }
}

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/chanhop/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/chanhop/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("chanhop")
        .join("config.toml")
}
