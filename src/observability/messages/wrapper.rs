// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types emitted by the wrappers around a call.
//!
//! This module contains message types for:
//! * Call lifecycle (about to call, called successfully)
//! * Call timing

use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

use crate::observability::messages::StructuredLog;

/// A wrapped callable is about to be invoked.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_decorators::observability::messages::wrapper::CallStarted;
///
/// let msg = CallStarted { callable: "pow_2" };
/// assert_eq!(msg.to_string(), "Calling pow_2");
/// ```
pub struct CallStarted<'a> {
    pub callable: &'a str,
}

impl Display for CallStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Calling {}", self.callable)
    }
}

impl StructuredLog for CallStarted<'_> {
    fn span(&self, name: &str) -> Span {
        tracing::info_span!("call", span_name = name, callable = self.callable)
    }
}

/// A wrapped callable returned without failing.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_decorators::observability::messages::wrapper::CallSucceeded;
///
/// let msg = CallSucceeded { callable: "pow_2" };
/// assert_eq!(msg.to_string(), "Successfully called pow_2");
/// ```
pub struct CallSucceeded<'a> {
    pub callable: &'a str,
}

impl Display for CallSucceeded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Successfully called {}", self.callable)
    }
}

impl StructuredLog for CallSucceeded<'_> {
    fn span(&self, name: &str) -> Span {
        tracing::info_span!("call_succeeded", span_name = name, callable = self.callable)
    }
}

/// Elapsed time of one call, in seconds with two decimals.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_decorators::observability::messages::wrapper::ExecutionTimed;
/// use std::time::Duration;
///
/// let msg = ExecutionTimed {
///     callable: "pow_2",
///     elapsed: Duration::from_millis(1250),
/// };
/// assert_eq!(msg.to_string(), "Execution of pow_2 took 1.25 seconds to execute");
/// ```
pub struct ExecutionTimed<'a> {
    pub callable: &'a str,
    pub elapsed: Duration,
}

impl Display for ExecutionTimed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Execution of {} took {:.2} seconds to execute",
            self.callable,
            self.elapsed.as_secs_f64()
        )
    }
}

impl StructuredLog for ExecutionTimed<'_> {
    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "execution_timed",
            span_name = name,
            callable = self.callable,
            elapsed = ?self.elapsed,
        )
    }
}

/// Elapsed time as reported by the legacy timing wrapper.
///
/// # Log Level
/// `info!` - Important operational event
pub struct LegacyExecutionTimed<'a> {
    pub callable: &'a str,
    pub elapsed: Duration,
}

impl Display for LegacyExecutionTimed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Execution of {} took {:.2} seconds.",
            self.callable,
            self.elapsed.as_secs_f64()
        )
    }
}

impl StructuredLog for LegacyExecutionTimed<'_> {
    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "legacy_execution_timed",
            span_name = name,
            callable = self.callable,
            elapsed = ?self.elapsed,
        )
    }
}
