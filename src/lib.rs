// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod callables;     // named function handles
pub mod config;        // config loading
pub mod decorators;    // timing + logging wrappers
pub mod demo;          // pow_2 demo target
pub mod errors;        // error handling
pub mod observability;
pub mod sinks;         // logging sinks
pub mod traits;        // unified abstractions
