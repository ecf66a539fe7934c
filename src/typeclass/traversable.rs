//! Turning a container inside out around another effect.
//!
//! Traversing an `Outcome` with an effectful function turns
//! `Outcome<E, A>` and `A -> G<B>` into `G<Outcome<E, B>>`. A failure is
//! lifted into `G` with `pure` and the function is never called; a success
//! runs the function once and wraps its payload back into `Success`.
//!
//! # Laws
//!
//! ```text
//! t.traverse(Identity) == Identity(t)        // identity
//! t.traverse(|a| Identity(f(a))) == Identity(t.fmap(f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Traversable;
//!
//! let nested: Outcome<String, Option<i32>> = Outcome::succeed(Some(1));
//! assert_eq!(nested.sequence(), Some(Outcome::Success(1)));
//!
//! let empty: Outcome<String, Option<i32>> = Outcome::succeed(None);
//! assert_eq!(empty.sequence(), None);
//! ```

use super::{Applicative, Foldable, Functor, Identity, TypeConstructor};
use crate::Outcome;

/// A functor that can move an inner effect to the outside.
pub trait Traversable: Functor + Foldable {
    /// Calls `function` on each payload and gathers its effect around the result.
    fn traverse<G, F>(self, function: F) -> G::WithType<Self::WithType<G::Inner>>
    where
        G: Applicative,
        F: FnMut(Self::Inner) -> G;

    /// [`Traversable::traverse`] with the identity function.
    #[inline]
    fn sequence(
        self,
    ) -> <Self::Inner as TypeConstructor>::WithType<
        Self::WithType<<Self::Inner as TypeConstructor>::Inner>,
    >
    where
        Self: Sized,
        Self::Inner: Applicative,
    {
        self.traverse::<Self::Inner, _>(|effect| effect)
    }
}

// Outcome<E, A>

impl<E, A> Traversable for Outcome<E, A> {
    fn traverse<G, F>(self, mut function: F) -> G::WithType<Outcome<E, G::Inner>>
    where
        G: Applicative,
        F: FnMut(A) -> G,
    {
        match self {
            Self::Failure(error) => G::pure(Outcome::Failure(error)),
            Self::Success(value) => function(value).fmap(Outcome::<E, G::Inner>::Success),
        }
    }
}

// Option<A>

impl<A> Traversable for Option<A> {
    fn traverse<G, F>(self, mut function: F) -> G::WithType<Option<G::Inner>>
    where
        G: Applicative,
        F: FnMut(A) -> G,
    {
        match self {
            None => G::pure(None),
            Some(value) => function(value).fmap(Some),
        }
    }
}

// Identity<A>

impl<A> Traversable for Identity<A> {
    fn traverse<G, F>(self, mut function: F) -> G::WithType<Identity<G::Inner>>
    where
        G: Applicative,
        F: FnMut(A) -> G,
    {
        function(self.0).fmap(Identity)
    }
}
