// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wrappers that observe a callable without changing what it returns.
//!
//! * [`Benchmark`] - logs how long each call took
//! * [`WithLogging`] - logs before and after each call
//! * [`LegacyBenchmark`] - the first timing wrapper; drops results, do not use
//!
//! Each wrapper has a [`Decorator`](crate::traits::Decorator) form so wrappers
//! can be configured once and stacked with [`compose`](crate::traits::compose).

mod benchmark;
mod legacy;
mod with_logging;


pub use benchmark::{benchmark, Benchmark, BenchmarkDecorator};
pub use legacy::{benchmark_legacy, LegacyBenchmark, LegacyBenchmarkDecorator, LEGACY_WRAPPER_NAME};
pub use with_logging::{with_default_logging, with_logging, LoggingDecorator, WithLogging};
