// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::observability::messages::{
    wrapper::{CallStarted, CallSucceeded},
    StructuredLog,
};
use crate::traits::{Callable, CallableMetadata, Decorator, Named, SharedSink};

/// Logging observer: announces each call before it starts and after it succeeds.
///
/// When the target fails only the "Calling" record is written; the error
/// propagates unchanged and the success record is skipped.
pub struct WithLogging<C> {
    inner: C,
    sink: SharedSink,
}

impl<C> WithLogging<C> {
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Named> Named for WithLogging<C> {
    fn metadata(&self) -> &CallableMetadata {
        self.inner.metadata()
    }
}

impl<In, C> Callable<In> for WithLogging<C>
where
    C: Callable<In>,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: In) -> Result<C::Output, C::Error> {
        let start_msg = CallStarted {
            callable: self.name(),
        };

        let span = start_msg.span("with_logging");
        let _guard = span.enter();
        start_msg.log(self.sink.as_ref());

        let value = self.inner.call(input)?;

        CallSucceeded {
            callable: self.name(),
        }
        .log(self.sink.as_ref());

        Ok(value)
    }
}

/// Wrap `target` so every call is logged to `sink`.
pub fn with_logging<C>(target: C, sink: SharedSink) -> WithLogging<C> {
    WithLogging { inner: target, sink }
}

/// Bind `sink` now and wrap targets later.
///
/// # Example
/// ```
/// use the_decorators::decorators::with_default_logging;
/// use the_decorators::callables::function;
/// use the_decorators::sinks::RecordingSink;
/// use the_decorators::traits::{Callable, Decorator};
///
/// let sink = RecordingSink::shared("my_app");
/// let logged = with_default_logging(sink.clone());
///
/// let square = logged.decorate(function("square", |n: i32| n * n));
/// assert_eq!(square.call(4).unwrap(), 16);
/// assert_eq!(sink.messages(), vec!["Calling square", "Successfully called square"]);
/// ```
pub fn with_default_logging(sink: SharedSink) -> LoggingDecorator {
    LoggingDecorator { sink }
}

/// [`with_logging`] with its sink already applied.
#[derive(Clone)]
pub struct LoggingDecorator {
    sink: SharedSink,
}

impl LoggingDecorator {
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }
}

impl Decorator for LoggingDecorator {
    type Wrapped<C> = WithLogging<C>;

    fn decorate<C>(&self, target: C) -> WithLogging<C> {
        with_logging(target, Arc::clone(&self.sink))
    }
}
