// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`Config`](crate::config::Config).
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The logging level is not a valid filter directive.
    #[error("Invalid logging level '{level}': {reason}")]
    InvalidLevel { level: String, reason: String },

    /// The logging channel name is empty.
    #[error("Logging channel name must not be empty")]
    EmptyChannel,
}
