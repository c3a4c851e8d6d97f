// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::consts::{DEFAULT_CHANNEL, DEFAULT_LOG_LEVEL};
use crate::errors::ConfigError;
use crate::observability::build_env_filter;

/// Top-level configuration for the demo binary.
///
/// Every section is optional; a missing file or an empty document yields
/// [`Config::default`].
///
/// # Example
/// ```yaml
/// logging:
///   level: info
///   channel: my_app
///   ansi: false
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
///
/// # Fields
/// * `level` - Filter directive for the subscriber (`info`, `my_app=debug`, ...)
/// * `channel` - Name of the default logging sink handed to the wrappers
/// * `ansi` - Whether terminal output is colored
#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            channel: default_channel(),
            ansi: default_ansi(),
        }
    }
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

fn default_ansi() -> bool {
    true
}

impl Config {
    /// Check that the level is a valid filter and the channel has a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        build_env_filter(&self.logging.level)?;

        if self.logging.channel.trim().is_empty() {
            return Err(ConfigError::EmptyChannel);
        }

        Ok(())
    }
}

/// Parse a config from YAML text.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    // An empty document deserializes to unit, not to an empty mapping.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load a config from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load a config from a YAML file and validate it.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}
