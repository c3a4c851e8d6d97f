// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::type_name;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Identity metadata carried by every callable handle.
///
/// Production wrappers hand out the metadata of the callable they wrap, so a
/// stack of wrappers still reports the name and documentation of the original
/// function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableMetadata {
    name: Cow<'static, str>,
    doc: Option<Cow<'static, str>>,
}

impl CallableMetadata {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// Type-level signature of a callable: input, output and failure types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub input: &'static str,
    pub output: &'static str,
    pub error: &'static str,
}

impl Signature {
    pub fn of<In, Out, E>() -> Self {
        Self {
            input: type_name::<In>(),
            output: type_name::<Out>(),
            error: type_name::<E>(),
        }
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "fn({}) -> Result<{}, {}>",
            self.input, self.output, self.error
        )
    }
}

/// Anything that carries callable identity metadata.
pub trait Named {
    fn metadata(&self) -> &CallableMetadata;

    fn name(&self) -> &str {
        self.metadata().name()
    }

    fn doc(&self) -> Option<&str> {
        self.metadata().doc()
    }
}

/// A named unit of behavior taking one input and producing a result or a failure.
///
/// Targets with several arguments take them as a tuple or a struct.
pub trait Callable<In>: Named {
    type Output;
    type Error;

    fn call(&self, input: In) -> Result<Self::Output, Self::Error>;

    fn signature(&self) -> Signature {
        Signature::of::<In, Self::Output, Self::Error>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_metadata_without_doc() {
        let meta = CallableMetadata::new("pow_2");
        assert_eq!(meta.name(), "pow_2");
        assert_eq!(meta.doc(), None);
    }

    #[test]
    fn test_metadata_with_doc() {
        let meta = CallableMetadata::new(String::from("pow_2")).with_doc("Squares a number");
        assert_eq!(meta.name(), "pow_2");
        assert_eq!(meta.doc(), Some("Squares a number"));
    }

    #[test]
    fn test_signature_display() {
        let sig = Signature::of::<i64, i64, Infallible>();
        assert_eq!(sig.input, "i64");
        assert_eq!(sig.output, "i64");
        assert_eq!(sig.to_string(), format!("fn(i64) -> Result<i64, {}>", sig.error));
    }
}
