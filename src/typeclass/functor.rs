//! Functors: structures whose payload can be rewritten in place.
//!
//! `fmap` changes what a structure carries without changing its shape. For
//! `Outcome` that means a `Success` stays a `Success` and a `Failure` is
//! returned untouched, with the function never called.
//!
//! Every instance satisfies
//!
//! ```text
//! value.fmap(|x| x)            == value
//! value.fmap(f).fmap(g)        == value.fmap(|x| g(f(x)))
//! ```
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Functor;
//!
//! let port: Outcome<String, u16> = Outcome::succeed(8080);
//! assert_eq!(port.fmap(|p| format!(":{p}")), Outcome::Success(":8080".to_string()));
//!
//! let missing: Outcome<String, u16> = Outcome::fail("no port".to_string());
//! assert_eq!(missing.fmap(|p| format!(":{p}")), Outcome::Failure("no port".to_string()));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::Outcome;

/// A structure that can rewrite its payload with a function.
pub trait Functor: TypeConstructor {
    /// Rewrites the payload, if there is one, with `function`.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Swaps the payload for `value`, keeping the shape.
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::typeclass::Functor;
    ///
    /// let checked: Outcome<&str, i32> = Outcome::succeed(5);
    /// assert_eq!(checked.replace("ok"), Outcome::Success("ok"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Forgets the payload. Useful when only success or failure matters.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<E, A> Functor for Outcome<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        Self::map(self, function)
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        Option::map(self, function)
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}
