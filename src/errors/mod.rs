// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod observability;

pub use config::ConfigError;
pub use observability::TracingInitError;
