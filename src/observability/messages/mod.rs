// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for wrapper log records.
//!
//! Each message type implements `Display` for its exact text and
//! [`StructuredLog`] to send itself to a [`LogSink`] at its level.
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_decorators::observability::messages::{wrapper::CallStarted, StructuredLog};
//! use the_decorators::sinks::RecordingSink;
//!
//! let sink = RecordingSink::new("my_app");
//! CallStarted { callable: "pow_2" }.log(&sink);
//!
//! assert_eq!(sink.messages(), vec!["Calling pow_2".to_string()]);
//! ```

pub mod wrapper;

use std::fmt::Display;
use tracing::{Level, Span};

use crate::traits::LogSink;

/// A log message that knows its level and how to open a span around its work.
pub trait StructuredLog: Display {
    fn level(&self) -> Level {
        Level::INFO
    }

    fn log(&self, sink: &dyn LogSink) {
        sink.log(self.level(), &self.to_string());
    }

    fn span(&self, name: &str) -> Span;
}
