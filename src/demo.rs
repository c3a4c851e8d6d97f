// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The demo target: `pow_2`, logged and timed.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

use crate::callables::try_function;
use crate::decorators::{with_default_logging, BenchmarkDecorator};
use crate::traits::{compose, Callable, Decorator, SharedSink};

/// Input the demo uses when none is given.
pub const DEFAULT_INPUT: Number = Number::Int(104);

/// An integer or a floating point number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Floats at or above this magnitude print in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e16;
/// Non-zero floats below this magnitude print in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-4;

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) if x.is_nan() => write!(f, "nan"),
            Number::Float(x) if x.is_infinite() => write!(f, "{}", x),
            Number::Float(x) if x != 0.0 && (x.abs() >= SCIENTIFIC_UPPER || x.abs() < SCIENTIFIC_LOWER) => {
                write_scientific(f, x)
            }
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

// Signed exponent with at least two digits: 1e+16, 1.5e-05.
fn write_scientific(f: &mut Formatter, x: f64) -> std::fmt::Result {
    let formatted = format!("{:e}", x);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
}

impl FromStr for Number {
    type Err = PowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let not_a_number = || PowError::NotANumber(s.to_string());

        let unsigned = s.trim_start_matches(['+', '-']);
        let is_special = ["inf", "infinity", "nan"]
            .iter()
            .any(|name| unsigned.eq_ignore_ascii_case(name));

        if s.contains(['.', 'e', 'E']) || is_special {
            s.parse().map(Number::Float).map_err(|_| not_a_number())
        } else {
            s.parse().map(Number::Int).map_err(|_| not_a_number())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PowError {
    #[error("{base} squared does not fit in a 64-bit integer")]
    Overflow { base: i64 },

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Square a number. Integers stay integers and fail instead of wrapping.
pub fn square(number: Number) -> Result<Number, PowError> {
    match number {
        Number::Int(n) => n
            .checked_mul(n)
            .map(Number::Int)
            .ok_or(PowError::Overflow { base: n }),
        Number::Float(x) => Ok(Number::Float(x * x)),
    }
}

/// `square` named `pow_2`, wrapped in logging around timing, both writing to `sink`.
pub fn pow_2(sink: SharedSink) -> impl Callable<Number, Output = Number, Error = PowError> {
    let logged_and_timed = compose(
        with_default_logging(sink.clone()),
        BenchmarkDecorator::new(sink),
    );

    logged_and_timed.decorate(try_function("pow_2", square).with_doc("Return the square of a number."))
}

/// Square `input` through the logged and timed `pow_2` and render the result.
///
/// Log records go to `sink`; the returned text is all the demo prints.
pub fn run(input: Number, sink: SharedSink) -> Result<String, PowError> {
    let pow_2 = pow_2(sink);
    Ok(pow_2.call(input)?.to_string())
}
