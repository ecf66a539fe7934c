//! Monoids: semigroups with a neutral starting value.
//!
//! [`Monoid::empty`] must leave any value unchanged when merged from either
//! side:
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! ```rust
//! use outcome::typeclass::Monoid;
//!
//! let lines = vec![vec!["a"], vec![], vec!["b"]];
//! assert_eq!(Vec::combine_all(lines), ["a", "b"]);
//! assert_eq!(String::combine_all(Vec::new()), "");
//! ```

use std::collections::BTreeSet;

use super::Semigroup;

/// A semigroup with a neutral element.
pub trait Monoid: Semigroup {
    /// The neutral element.
    fn empty() -> Self;

    /// Merges every value from left to right, starting from [`Monoid::empty`].
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::reduce_all(values).unwrap_or_else(Self::empty)
    }

    /// Whether this value is the neutral element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq,
    {
        self == &Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_is_neutral_on_both_sides() {
        let value = (String::from("x"), vec![1]);
        assert_eq!(<(String, Vec<i32>)>::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Monoid::empty()), value);
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        let nothing: Vec<BTreeSet<u8>> = Vec::new();
        assert!(BTreeSet::combine_all(nothing).is_empty());
    }

    #[rstest]
    fn combine_all_of_options_keeps_present_values() {
        let values = vec![None, Some(String::from("a")), None, Some(String::from("b"))];
        assert_eq!(Option::combine_all(values), Some(String::from("ab")));
    }

    #[rstest]
    #[case(String::new(), true)]
    #[case(String::from(" "), false)]
    fn is_empty_value_compares_with_empty(#[case] value: String, #[case] expected: bool) {
        assert_eq!(value.is_empty_value(), expected);
    }
}
