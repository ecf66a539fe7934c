//! Equivalence type class - caller-supplied equality.
//!
//! An `Equivalence<T>` is a value that decides whether two `T`s are equal.
//! It lets equality be chosen per call site instead of per type, e.g.
//! comparing error messages case-insensitively.
//!
//! Any `Fn(&T, &T) -> bool` is an equivalence, and [`PartialEqEquivalence`]
//! defers to `PartialEq`.
//!
//! # Laws
//!
//! ```text
//! eq.equals(a, a)                                        // reflexivity
//! eq.equals(a, b) == eq.equals(b, a)                     // symmetry
//! eq.equals(a, b) && eq.equals(b, c) implies eq.equals(a, c)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::typeclass::Equivalence;
//!
//! let case_insensitive = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
//! assert!(case_insensitive.equals(&"Timeout".to_string(), &"TIMEOUT".to_string()));
//! ```

/// A caller-supplied equality relation on `T`.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` are equivalent.
    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// The equivalence induced by `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialEqEquivalence;

impl<T: PartialEq + ?Sized> Equivalence<T> for PartialEqEquivalence {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn partial_eq_equivalence(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(PartialEqEquivalence.equals(&left, &right), expected);
    }

    #[rstest]
    fn closure_equivalence_on_unsized() {
        let same_length = |a: &str, b: &str| a.len() == b.len();
        assert!(Equivalence::<str>::equals(&same_length, "abc", "xyz"));
        assert!(!Equivalence::<str>::equals(&same_length, "ab", "xyz"));
    }

    #[rstest]
    fn modular_equivalence_is_symmetric() {
        let mod_ten = |a: &i32, b: &i32| a % 10 == b % 10;
        assert_eq!(mod_ten.equals(&13, &3), mod_ten.equals(&3, &13));
    }
}
