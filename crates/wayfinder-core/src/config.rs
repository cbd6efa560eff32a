//! User configuration for wayfinder (stored in ~/.config/wayfinder/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfinderError};
use crate::generate::GeneratorOptions;
use crate::graph::Strategy;

const CONFIG_DIR: &str = "wayfinder";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYFINDER_CONFIG_DIR";

/// Defaults applied when the command line leaves a setting out
///
/// ```toml
/// strategy = "heap"
///
/// [generator]
/// nodes = 8
/// density = 0.3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strategy: Strategy,
    pub generator: GeneratorOptions,
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    WayfinderError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config_not_found");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            WayfinderError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            WayfinderError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;
        config.generator.validate()?;
        tracing::debug!(path = %path.display(), strategy = %config.strategy, "load_config");
        Ok(config)
    }
}
