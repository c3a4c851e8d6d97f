// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tracing::Level;

use crate::traits::LogSink;

/// Channel used by [`TracingSink::root`].
pub const ROOT_CHANNEL: &str = "root";

/// Sink that forwards records to the process `tracing` subscriber.
///
/// The channel name travels as the `channel` field of every event.
#[derive(Debug, Clone)]
pub struct TracingSink {
    channel: String,
}

impl TracingSink {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_CHANNEL)
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::root()
    }
}

impl LogSink for TracingSink {
    fn channel(&self) -> &str {
        &self.channel
    }

    fn log(&self, level: Level, message: &str) {
        let channel = self.channel.as_str();
        match level {
            Level::ERROR => tracing::error!(channel, "{}", message),
            Level::WARN => tracing::warn!(channel, "{}", message),
            Level::INFO => tracing::info!(channel, "{}", message),
            Level::DEBUG => tracing::debug!(channel, "{}", message),
            _ => tracing::trace!(channel, "{}", message),
        }
    }
}
