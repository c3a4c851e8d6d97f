// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tracing::Level;

/// A destination for leveled text records.
///
/// Sinks are owned outside the wrappers and shared with them through
/// [`SharedSink`]; wrappers only ever write to them.
pub trait LogSink: Send + Sync {
    /// Name of the logging channel records are sent to.
    fn channel(&self) -> &str;

    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

pub type SharedSink = Arc<dyn LogSink>;
