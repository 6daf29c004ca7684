use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    styles::StyleParameters,
};

/// Main configuration for Retro-Image-Maker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default style parameters; command line flags override them
    pub style: StyleParameters,

    /// Settings for rendering the whole catalog
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.style.pixel_block_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "style.pixel_block_size".to_string(),
                value: self.style.pixel_block_size.to_string()
            }.into());
        }
        self.batch.validate()?;
        Ok(())
    }
}

/// Batch rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of worker threads used to render styles in parallel
    pub threads: usize,

    /// Prefix of every file written by a batch run
    pub file_prefix: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            file_prefix: "pixel_".to_string(),
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "batch.threads".to_string(),
                value: self.threads.to_string()
            }.into());
        }

        if self.file_prefix.contains(&['/', '\\'][..]) {
            return Err(ConfigError::InvalidValue {
                key: "batch.file_prefix".to_string(),
                value: self.file_prefix.clone()
            }.into());
        }

        Ok(())
    }
}
