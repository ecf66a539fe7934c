//! Sequencing where each step may inspect the previous result.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   // left identity
//! m.flat_map(pure) == m                                         // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! [`MonadRec`] adds a loop combinator whose stack usage does not grow with
//! the number of iterations.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::typeclass::Monad;
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     Outcome::from_result(input.parse::<i32>().map_err(|error| error.to_string()))
//! }
//!
//! let doubled = parse("21").flat_map(|n| Outcome::succeed(n * 2));
//! assert_eq!(doubled, Outcome::Success(42));
//! assert!(parse("x").flat_map(|n| Outcome::succeed(n * 2)).is_failure());
//! ```

use super::{Applicative, Identity};
use crate::Outcome;

/// An applicative whose next computation is chosen from the current result.
pub trait Monad: Applicative {
    /// Feeds the success payload to `function` and returns what it produces.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Continues with `next` once `self` has succeeded, dropping its payload.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

/// A monad with a stack-safe loop.
///
/// `tail_rec_m(initial, step)` calls `step` repeatedly. A step result of
/// `Failure(next)` inside the monad continues the loop with `next`, and
/// `Success(done)` finishes it. The monad's own short-circuit (a failed
/// `Outcome`, a `None`) stops the loop immediately.
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
/// use outcome::typeclass::MonadRec;
///
/// let counted = <Option<()>>::tail_rec_m(0_u32, |n| {
///     Some(if n < 100_000 { Outcome::Failure(n + 1) } else { Outcome::Success(n) })
/// });
/// assert_eq!(counted, Some(100_000));
/// ```
pub trait MonadRec: Monad {
    /// Runs `step` until it produces a finished value.
    fn tail_rec_m<S, B, F>(initial: S, step: F) -> Self::WithType<B>
    where
        F: FnMut(S) -> Self::WithType<Outcome<S, B>>;
}

// Outcome<E, A>

impl<E, A> Monad for Outcome<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<E, A> MonadRec for Outcome<E, A> {
    fn tail_rec_m<S, B, F>(initial: S, step: F) -> Outcome<E, B>
    where
        F: FnMut(S) -> Outcome<E, Outcome<S, B>>,
    {
        Outcome::tail_rec(initial, step)
    }
}

// Option<A>

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> MonadRec for Option<A> {
    fn tail_rec_m<S, B, F>(initial: S, mut step: F) -> Option<B>
    where
        F: FnMut(S) -> Option<Outcome<S, B>>,
    {
        let mut state = initial;
        loop {
            match step(state)? {
                Outcome::Failure(next) => state = next,
                Outcome::Success(done) => return Some(done),
            }
        }
    }
}

// Identity<A>

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> MonadRec for Identity<A> {
    fn tail_rec_m<S, B, F>(initial: S, mut step: F) -> Identity<B>
    where
        F: FnMut(S) -> Identity<Outcome<S, B>>,
    {
        let mut state = initial;
        loop {
            match step(state).0 {
                Outcome::Failure(next) => state = next,
                Outcome::Success(done) => return Identity(done),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn halve(n: i32) -> Outcome<String, i32> {
        if n % 2 == 0 {
            Outcome::succeed(n / 2)
        } else {
            Outcome::fail(format!("{n} is odd"))
        }
    }

    #[rstest]
    #[case(8, Outcome::Success(2))]
    #[case(6, Outcome::Failure("3 is odd".to_string()))]
    #[case(5, Outcome::Failure("5 is odd".to_string()))]
    fn outcome_flat_map_chains(#[case] input: i32, #[case] expected: Outcome<String, i32>) {
        let result = Monad::flat_map(halve(input), halve);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn outcome_then_discards_first_result() {
        let first: Outcome<&str, i32> = Outcome::succeed(1);
        assert_eq!(Monad::then(first, Outcome::succeed("next")), Outcome::Success("next"));
    }

    #[rstest]
    fn outcome_tail_rec_m_stops_on_failure() {
        let result = <Outcome<String, ()>>::tail_rec_m(0, |n: i32| {
            if n == 3 {
                Outcome::fail(format!("stopped at {n}"))
            } else {
                Outcome::succeed(Outcome::<i32, i32>::Failure(n + 1))
            }
        });
        assert_eq!(result, Outcome::<String, i32>::Failure("stopped at 3".to_string()));
    }

    #[rstest]
    fn option_tail_rec_m_is_stack_safe() {
        let result = <Option<()>>::tail_rec_m(1_000_000_u64, |n| {
            Some(if n == 0 { Outcome::Success("done") } else { Outcome::Failure(n - 1) })
        });
        assert_eq!(result, Some("done"));
    }

    #[rstest]
    fn identity_tail_rec_m_accumulates() {
        let result = <Identity<()>>::tail_rec_m((0_u32, 0_u32), |(n, total)| {
            Identity(if n > 10 { Outcome::Success(total) } else { Outcome::Failure((n + 1, total + n)) })
        });
        assert_eq!(result, Identity(55));
    }
}
