// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::errors::{ConfigError, TracingInitError};

/// Build the filter for a configured level such as `info` or `my_app=debug`.
pub fn build_env_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(level).map_err(|e| ConfigError::InvalidLevel {
        level: level.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global `fmt` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level when it is set and valid.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TracingInitError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_env_filter(&config.level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| TracingInitError::Install(e.to_string()))
}
