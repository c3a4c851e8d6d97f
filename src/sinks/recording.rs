// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;

use crate::traits::LogSink;

/// One record captured by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub channel: String,
    pub message: String,
}

/// In-memory sink that keeps every record in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    channel: String,
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn shared(channel: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(channel))
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Poisoning is ignored: a push either completed or never happened.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for RecordingSink {
    fn channel(&self) -> &str {
        &self.channel
    }

    fn log(&self, level: Level, message: &str) {
        self.lock().push(LogRecord {
            level,
            channel: self.channel.clone(),
            message: message.to_string(),
        });
    }
}
