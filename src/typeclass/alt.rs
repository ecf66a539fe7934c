//! Alt type class - left-biased choice between two computations.
//!
//! `alt` keeps the first computation when it succeeds and otherwise returns
//! the alternative unchanged. Unlike `Alternative` there is no `empty`:
//! `Outcome` has no failure value to invent.
//!
//! # Laws
//!
//! ```text
//! a.alt(b).alt(c) == a.alt(b.alt(c))          // associativity
//! a.alt(b).fmap(f) == a.fmap(f).alt(b.fmap(f)) // distributivity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Alt;
//!
//! let primary: Outcome<&str, i32> = Outcome::fail("primary down");
//! let replica: Outcome<&str, i32> = Outcome::succeed(7);
//! assert_eq!(primary.alt(replica), Outcome::Success(7));
//! ```

use super::Functor;
use crate::Outcome;

/// A functor with an associative, left-biased choice operation.
pub trait Alt: Functor {
    /// Returns `self` if it succeeded, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Like [`Alt::alt`], but `alternative` is only evaluated when needed.
    #[must_use]
    fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self;
}

impl<E, A> Alt for Outcome<E, A> {
    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or_else(alternative)
    }

    #[inline]
    fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.or_else_with(alternative)
    }
}

impl<A> Alt for Option<A> {
    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.or_else(alternative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::Success(1), Outcome::Success(2), Outcome::Success(1))]
    #[case(Outcome::Success(1), Outcome::Failure("b"), Outcome::Success(1))]
    #[case(Outcome::Failure("a"), Outcome::Success(2), Outcome::Success(2))]
    #[case(Outcome::Failure("a"), Outcome::Failure("b"), Outcome::Failure("b"))]
    fn outcome_alt_is_left_biased(
        #[case] first: Outcome<&str, i32>,
        #[case] second: Outcome<&str, i32>,
        #[case] expected: Outcome<&str, i32>,
    ) {
        assert_eq!(first.alt(second), expected);
    }

    #[rstest]
    fn outcome_alt_with_skips_thunk_on_success() {
        let success: Outcome<&str, i32> = Outcome::succeed(1);
        let result = success.alt_with(|| panic!("alternative must not run"));
        assert_eq!(result, Outcome::Success(1));
    }

    #[rstest]
    fn outcome_alt_is_associative() {
        let a: Outcome<&str, i32> = Outcome::fail("a");
        let b: Outcome<&str, i32> = Outcome::fail("b");
        let c: Outcome<&str, i32> = Outcome::succeed(3);
        assert_eq!(a.alt(b).alt(c), a.alt(b.alt(c)));
    }

    #[rstest]
    fn option_alt() {
        assert_eq!(None.alt(Some(2)), Some(2));
        assert_eq!(Some(1).alt(Some(2)), Some(1));
    }
}
