use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "relver.toml";

/// Represents the complete configuration for relver.
///
/// Contains the release output directory and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default release output directory.
fn default_output_dir() -> String {
    "_rel".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// Controls reporting only; never changes the computed order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub warn_unsemantic: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            warn_unsemantic: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relver.toml` in current directory
/// 3. `relver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or sets an empty `output_dir`
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    if config.output_dir.trim().is_empty() {
        return Err(ReleaseError::config("output_dir must not be empty"));
    }
    log::debug!("loaded config: {:?}", config);
    Ok(config)
}
