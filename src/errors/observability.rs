// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::ConfigError;

/// Errors raised while installing the global tracing subscriber.
#[derive(Error, Debug)]
pub enum TracingInitError {
    #[error(transparent)]
    Filter(#[from] ConfigError),

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}
