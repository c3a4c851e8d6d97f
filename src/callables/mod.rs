// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Named callable handles built from plain functions and closures.

mod function;

pub use function::{function, try_function, Function, TryFunction};
