//! Folding: collapsing a structure into a single accumulated value.
//!
//! `Outcome<E, A>` folds as a container of zero or one success payloads: a
//! failure contributes nothing and leaves the accumulator untouched.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Foldable;
//!
//! let success: Outcome<&str, i32> = Outcome::succeed(3);
//! assert_eq!(success.fold_left(10, |total, n| total + n), 13);
//!
//! let failure: Outcome<&str, i32> = Outcome::fail("e");
//! assert_eq!(failure.fold_left(10, |total, n| total + n), 10);
//! ```

use super::{Identity, Monoid, TypeConstructor};
use crate::Outcome;

/// A structure whose payloads can be visited in order and accumulated.
pub trait Foldable: TypeConstructor {
    /// Accumulates payloads first to last, accumulator on the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Accumulates payloads last to first, accumulator on the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Turns each payload into a monoid value and merges them, starting from
    /// `M::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::typeclass::Foldable;
    ///
    /// let success: Outcome<(), i32> = Outcome::succeed(7);
    /// let rendered: String = success.fold_map(|n| n.to_string());
    /// assert_eq!(rendered, "7");
    ///
    /// let failure: Outcome<(), i32> = Outcome::fail(());
    /// let rendered: String = failure.fold_map(|n| n.to_string());
    /// assert_eq!(rendered, "");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// `true` when there is no payload to visit.
    fn is_empty(&self) -> bool;

    /// How many payloads a fold would visit.
    fn length(&self) -> usize;

    /// Collects the payloads in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// The first payload accepted by `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }
}

impl<E, A> Foldable for Outcome<E, A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Failure(_) => init,
            Self::Success(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Failure(_) => init,
            Self::Success(value) => function(value, init),
        }
    }

    fn is_empty(&self) -> bool {
        self.is_failure()
    }

    fn length(&self) -> usize {
        usize::from(self.is_success())
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn length(&self) -> usize {
        1
    }
}
