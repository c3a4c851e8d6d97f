// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A wrapper factory: takes a target now and returns the wrapped target.
///
/// A decorator holds whatever configuration it was built with (a logging sink,
/// for example) and applies it to every target it decorates.
pub trait Decorator {
    type Wrapped<C>;

    fn decorate<C>(&self, target: C) -> Self::Wrapped<C>;
}

/// Two decorators applied as one: `outer` around `inner` around the target.
#[derive(Debug, Clone)]
pub struct Compose<O, I> {
    outer: O,
    inner: I,
}

impl<O, I> Decorator for Compose<O, I>
where
    O: Decorator,
    I: Decorator,
{
    type Wrapped<C> = O::Wrapped<I::Wrapped<C>>;

    fn decorate<C>(&self, target: C) -> Self::Wrapped<C> {
        self.outer.decorate(self.inner.decorate(target))
    }
}

/// Build a decorator that applies `inner` first and then wraps the result in `outer`.
///
/// Pre-steps run outer-to-inner and post-steps inner-to-outer.
pub fn compose<O, I>(outer: O, inner: I) -> Compose<O, I>
where
    O: Decorator,
    I: Decorator,
{
    Compose { outer, inner }
}
