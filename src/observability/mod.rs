// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides the message types every wrapper logs and the setup of
//! the process-wide `tracing` subscriber. Message types follow a struct-based
//! pattern with `Display` implementations so the record texts live in one place.
//!
//! # Architecture
//!
//! * `messages::wrapper` - Call lifecycle and timing records
//! * `subscriber` - `tracing_subscriber` installation from [`LoggingConfig`]
//!
//! [`LoggingConfig`]: crate::config::LoggingConfig

pub mod messages;
mod subscriber;

pub use subscriber::{build_env_filter, init_tracing};
