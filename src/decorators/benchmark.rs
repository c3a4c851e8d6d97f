// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use crate::observability::messages::{wrapper::ExecutionTimed, StructuredLog};
use crate::sinks::TracingSink;
use crate::traits::{Callable, CallableMetadata, Decorator, Named, SharedSink};

/// Timing observer: logs how long each call of the wrapped callable took.
///
/// Elapsed time is measured with [`Instant`], so clock adjustments do not skew it.
/// The record is written only after the target returns `Ok`; a failing target
/// propagates its error without a timing record.
pub struct Benchmark<C> {
    inner: C,
    sink: SharedSink,
}

impl<C> Benchmark<C> {
    /// Wrap `inner`, logging to the root tracing channel.
    pub fn new(inner: C) -> Self {
        Self::with_sink(inner, Arc::new(TracingSink::root()))
    }

    pub fn with_sink(inner: C, sink: SharedSink) -> Self {
        Self { inner, sink }
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Named> Named for Benchmark<C> {
    fn metadata(&self) -> &CallableMetadata {
        self.inner.metadata()
    }
}

impl<In, C> Callable<In> for Benchmark<C>
where
    C: Callable<In>,
{
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: In) -> Result<C::Output, C::Error> {
        let start_time = Instant::now();
        let value = self.inner.call(input)?;

        ExecutionTimed {
            callable: self.name(),
            elapsed: start_time.elapsed(),
        }
        .log(self.sink.as_ref());

        Ok(value)
    }
}

/// Wrap `target` in a [`Benchmark`] logging to the root tracing channel.
pub fn benchmark<C>(target: C) -> Benchmark<C> {
    Benchmark::new(target)
}

/// Decorator form of [`Benchmark`], bound to one sink.
#[derive(Clone)]
pub struct BenchmarkDecorator {
    sink: SharedSink,
}

impl BenchmarkDecorator {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }
}

impl Default for BenchmarkDecorator {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink::root()))
    }
}

impl Decorator for BenchmarkDecorator {
    type Wrapped<C> = Benchmark<C>;

    fn decorate<C>(&self, target: C) -> Benchmark<C> {
        Benchmark::with_sink(target, Arc::clone(&self.sink))
    }
}
