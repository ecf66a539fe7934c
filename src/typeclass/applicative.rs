//! Combining computations that do not depend on each other.
//!
//! The `Outcome` instance is fail-fast: the leftmost failure is returned and
//! later failures are discarded. For an instance that accumulates failures,
//! see [`crate::outcome::ValidatedApplicative`].
//!
//! # Laws
//!
//! ```text
//! pure(x).map2(fa, |_, a| a) == fa                      // left identity
//! fa.map2(pure(x), |a, _| a) == fa                      // right identity
//! pure(f).apply(pure(x)) == pure(f(x))                  // homomorphism
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Applicative;
//!
//! let lifted: Outcome<String, i32> = <Outcome<String, ()>>::pure(3);
//! assert_eq!(lifted, Outcome::Success(3));
//!
//! let left: Outcome<&str, i32> = Outcome::fail("first");
//! let right: Outcome<&str, i32> = Outcome::fail("second");
//! assert_eq!(left.product(right), Outcome::Failure("first"));
//! ```

use super::{Functor, Identity};
use crate::Outcome;

/// A functor that can wrap a bare value and merge two independent
/// computations into one.
pub trait Applicative: Functor {
    /// Wraps `value` with no failure and no effect.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Merges `self` and `other` through `function`, left side first.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// [`Applicative::map2`] for three operands.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Both results as a pair.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left result once both have succeeded.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right result once both have succeeded.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Calls the function held by `self` with the argument held by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::typeclass::Applicative;
    ///
    /// let function: Outcome<&str, fn(i32) -> i32> = Outcome::succeed(|n| n + 1);
    /// assert_eq!(function.apply(Outcome::succeed(1)), Outcome::Success(2));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

// Outcome<E, A>

impl<E, A> Applicative for Outcome<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        function: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Self::map3(self, second, third, function)
    }
}

// Option<A>

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Some(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Some(function(self?, second?, third?))
    }
}

// Identity<A>

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }
}
