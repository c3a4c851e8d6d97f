// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! First cut of the timing observer, kept as a negative example.
//!
//! It discards the wrapped callable's result and reports its own identity
//! instead of the target's. Use [`Benchmark`](super::Benchmark) instead.

use std::sync::Arc;
use std::time::Instant;

use crate::observability::messages::{wrapper::LegacyExecutionTimed, StructuredLog};
use crate::sinks::TracingSink;
use crate::traits::{Callable, CallableMetadata, Decorator, Named, SharedSink};

/// Name every legacy wrapper reports for itself.
pub const LEGACY_WRAPPER_NAME: &str = "wrapper";

pub struct LegacyBenchmark<C> {
    inner: C,
    sink: SharedSink,
    metadata: CallableMetadata,
}

impl<C> LegacyBenchmark<C> {
    pub fn new(inner: C) -> Self {
        Self::with_sink(inner, Arc::new(TracingSink::root()))
    }

    pub fn with_sink(inner: C, sink: SharedSink) -> Self {
        Self {
            inner,
            sink,
            metadata: CallableMetadata::new(LEGACY_WRAPPER_NAME),
        }
    }
}

impl<C> Named for LegacyBenchmark<C> {
    fn metadata(&self) -> &CallableMetadata {
        &self.metadata
    }
}

impl<In, C> Callable<In> for LegacyBenchmark<C>
where
    C: Callable<In>,
{
    type Output = ();
    type Error = C::Error;

    fn call(&self, input: In) -> Result<(), C::Error> {
        let start_time = Instant::now();
        let _value = self.inner.call(input)?;

        LegacyExecutionTimed {
            callable: self.inner.name(),
            elapsed: start_time.elapsed(),
        }
        .log(self.sink.as_ref());

        Ok(())
    }
}

pub fn benchmark_legacy<C>(target: C) -> LegacyBenchmark<C> {
    LegacyBenchmark::new(target)
}

#[derive(Clone)]
pub struct LegacyBenchmarkDecorator {
    sink: SharedSink,
}

impl LegacyBenchmarkDecorator {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }
}

impl Decorator for LegacyBenchmarkDecorator {
    type Wrapped<C> = LegacyBenchmark<C>;

    fn decorate<C>(&self, target: C) -> LegacyBenchmark<C> {
        LegacyBenchmark::with_sink(target, Arc::clone(&self.sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callables::function;
    use crate::sinks::RecordingSink;

    #[test]
    fn test_discards_result() {
        let sink = RecordingSink::shared("test");
        let wrapped = LegacyBenchmark::with_sink(function("pow_2", |n: i64| n * n), sink.clone());

        let result: Result<(), _> = wrapped.call(104);
        assert!(result.is_ok());
        assert_eq!(sink.messages().len(), 1);
    }

    #[test]
    fn test_does_not_preserve_metadata() {
        let target = function("pow_2", |n: i64| n * n).with_doc("Squares a number");
        let target_signature = <_ as Callable<i64>>::signature(&target);
        let wrapped = benchmark_legacy(target);

        assert_eq!(wrapped.name(), LEGACY_WRAPPER_NAME);
        assert_eq!(wrapped.doc(), None);
        assert_ne!(<_ as Callable<i64>>::signature(&wrapped), target_signature);
    }

    #[test]
    fn test_logs_target_name() {
        let sink = RecordingSink::shared("test");
        let decorator = LegacyBenchmarkDecorator::new(sink.clone());
        let wrapped = decorator.decorate(function("pow_2", |n: i64| n * n));

        wrapped.call(3).unwrap();

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Execution of pow_2 took "));
        assert!(messages[0].ends_with(" seconds."));
    }
}
