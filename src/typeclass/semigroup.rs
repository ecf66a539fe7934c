//! Semigroups: an associative way to merge two values of one type.
//!
//! In this crate a semigroup is mostly a failure-merging policy. When both
//! sides of a validated combination fail, the two failure payloads are
//! merged with [`Semigroup::combine`], left operand first.
//!
//! Only associativity is required:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Commutativity is not, so `combine` on a `Vec` of messages keeps them in
//! the order they were reported.
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use outcome::typeclass::Semigroup;
//!
//! let reported = vec!["name is empty"].combine(vec!["age is negative"]);
//! assert_eq!(reported, ["name is empty", "age is negative"]);
//!
//! let codes = BTreeSet::from([3, 1]).combine(BTreeSet::from([2, 3]));
//! assert_eq!(codes.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use std::collections::BTreeSet;

/// A type with an associative binary operation.
pub trait Semigroup: Sized {
    /// Merges `other` into `self`, `self` on the left.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Merges two borrowed values into a fresh one.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        Self::combine(self.clone(), other.clone())
    }

    /// Merges every value of a non-empty sequence from left to right.
    ///
    /// Returns `None` for an empty sequence, which has no value to start from.
    ///
    /// ```rust
    /// use outcome::typeclass::Semigroup;
    ///
    /// let merged = Vec::reduce_all([vec!['a'], vec!['b', 'c']]);
    /// assert_eq!(merged, Some(vec!['a', 'b', 'c']));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = values.into_iter();
        let first = values.next()?;
        Some(values.fold(first, Self::combine))
    }
}

impl Semigroup for String {
    fn combine(self, other: Self) -> Self {
        self + &other
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Set union.
impl<T: Ord> Semigroup for BTreeSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Absent values are ignored; two present values are merged.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

macro_rules! tuple_semigroup {
    ($($name:ident : $index:tt),+) => {
        /// Componentwise.
        impl<$($name: Semigroup),+> Semigroup for ($($name,)+) {
            fn combine(self, other: Self) -> Self {
                ($(self.$index.combine(other.$index),)+)
            }
        }
    };
}

tuple_semigroup!(A: 0, B: 1);
tuple_semigroup!(A: 0, B: 1, C: 2);
