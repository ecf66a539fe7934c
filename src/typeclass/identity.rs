//! `Identity`: the effect that does nothing.
//!
//! Traversing with `Identity` as the effect is plain mapping, which makes it
//! the reference point for the traversable laws.

use super::TypeConstructor;

/// A value with no effect around it.
///
/// ```rust
/// use outcome::typeclass::Identity;
///
/// let boxed = Identity::new("plain");
/// assert_eq!(*boxed.as_inner(), "plain");
/// assert_eq!(boxed.into_inner(), "plain");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        let Self(value) = self;
        value
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        let Self(value) = self;
        value
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}
