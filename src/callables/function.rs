// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::borrow::Cow;
use std::convert::Infallible;

use crate::traits::{Callable, CallableMetadata, Named};

/// Callable handle around an infallible function or closure.
pub struct Function<F> {
    metadata: CallableMetadata,
    f: F,
}

impl<F> Function<F> {
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.metadata = self.metadata.with_doc(doc);
        self
    }
}

impl<In, Out, F> Callable<In> for Function<F>
where
    F: Fn(In) -> Out,
{
    type Output = Out;
    type Error = Infallible;

    fn call(&self, input: In) -> Result<Out, Infallible> {
        Ok((self.f)(input))
    }
}

impl<F> Named for Function<F> {
    fn metadata(&self) -> &CallableMetadata {
        &self.metadata
    }
}

/// Callable handle around a function or closure that returns `Result`.
pub struct TryFunction<F> {
    metadata: CallableMetadata,
    f: F,
}

impl<F> TryFunction<F> {
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.metadata = self.metadata.with_doc(doc);
        self
    }
}

impl<In, Out, E, F> Callable<In> for TryFunction<F>
where
    F: Fn(In) -> Result<Out, E>,
{
    type Output = Out;
    type Error = E;

    fn call(&self, input: In) -> Result<Out, E> {
        (self.f)(input)
    }
}

impl<F> Named for TryFunction<F> {
    fn metadata(&self) -> &CallableMetadata {
        &self.metadata
    }
}

/// Name an infallible function so it can be wrapped.
///
/// # Example
/// ```
/// use the_decorators::callables::function;
/// use the_decorators::traits::{Callable, Named};
///
/// let double = function("double", |n: i32| n * 2);
/// assert_eq!(double.call(21).unwrap(), 42);
/// assert_eq!(double.name(), "double");
/// ```
pub fn function<In, Out, F>(name: impl Into<Cow<'static, str>>, f: F) -> Function<F>
where
    F: Fn(In) -> Out,
{
    Function {
        metadata: CallableMetadata::new(name),
        f,
    }
}

/// Name a fallible function so it can be wrapped. Its `Err` is the callable's failure.
pub fn try_function<In, Out, E, F>(name: impl Into<Cow<'static, str>>, f: F) -> TryFunction<F>
where
    F: Fn(In) -> Result<Out, E>,
{
    TryFunction {
        metadata: CallableMetadata::new(name),
        f,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add((a, b): (i32, i32)) -> i32 {
        a + b
    }

    #[test]
    fn test_function_returns_value() {
        let f = function("add", add);
        assert_eq!(f.call((2, 3)).unwrap(), 5);
        assert_eq!(f.name(), "add");
        assert_eq!(f.doc(), None);
    }

    #[test]
    fn test_function_with_doc() {
        let f = function("add", add).with_doc("Adds two numbers");
        assert_eq!(f.doc(), Some("Adds two numbers"));
    }

    #[test]
    fn test_function_can_be_called_repeatedly() {
        let f = function("len", |s: &str| s.len());
        assert_eq!(f.call("abc").unwrap(), 3);
        assert_eq!(f.call("").unwrap(), 0);
    }

    #[test]
    fn test_try_function_passes_error_through() {
        let parse = try_function("parse", |s: &str| s.parse::<u8>());
        assert_eq!(parse.call("7").unwrap(), 7);
        assert!(parse.call("nope").is_err());
    }

    #[test]
    fn test_signature_reflects_types() {
        let parse = try_function("parse", |s: String| s.parse::<u8>());
        let sig = <_ as Callable<String>>::signature(&parse);
        assert_eq!(sig.input, std::any::type_name::<String>());
        assert_eq!(sig.output, "u8");
        assert!(sig.error.ends_with("ParseIntError"));
    }
}
