// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Logging sink implementations.

mod recording;
mod tracing_sink;

pub use recording::{LogRecord, RecordingSink};
pub use tracing_sink::{TracingSink, ROOT_CHANNEL};
