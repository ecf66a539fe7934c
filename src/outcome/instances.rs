//! Outcome instances that are built from instances of its payloads.

use std::fmt;

use super::Outcome;
use crate::typeclass::{Equivalence, Monoid, Semigroup, Show};

// =============================================================================
// Equivalence
// =============================================================================

/// An equivalence on outcomes built from equivalences on both payloads.
///
/// Two outcomes are equivalent when both failed with equivalent failures or
/// both succeeded with equivalent successes. A failure is never equivalent
/// to a success.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, OutcomeEquivalence};
/// use outcome::typeclass::{Equivalence, PartialEqEquivalence};
///
/// let loose = OutcomeEquivalence::new(
///     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
///     PartialEqEquivalence,
/// );
///
/// let left: Outcome<String, i32> = Outcome::fail("Timeout".to_string());
/// let right: Outcome<String, i32> = Outcome::fail("TIMEOUT".to_string());
/// assert!(loose.equals(&left, &right));
/// let other: Outcome<String, i32> = Outcome::succeed(1);
/// assert!(!loose.equals(&left, &other));
/// ```
#[derive(Clone, Copy, Default)]
pub struct OutcomeEquivalence<EE, AE> {
    failure: EE,
    success: AE,
}

impl<EE, AE> OutcomeEquivalence<EE, AE> {
    /// Builds an outcome equivalence from a failure and a success equivalence.
    pub const fn new(failure: EE, success: AE) -> Self {
        Self { failure, success }
    }
}

impl<E, A, EE, AE> Equivalence<Outcome<E, A>> for OutcomeEquivalence<EE, AE>
where
    EE: Equivalence<E>,
    AE: Equivalence<A>,
{
    fn equals(&self, left: &Outcome<E, A>, right: &Outcome<E, A>) -> bool {
        match (left, right) {
            (Outcome::Failure(left), Outcome::Failure(right)) => self.failure.equals(left, right),
            (Outcome::Success(left), Outcome::Success(right)) => self.success.equals(left, right),
            _ => false,
        }
    }
}

impl<EE, AE> fmt::Debug for OutcomeEquivalence<EE, AE> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("OutcomeEquivalence")
    }
}

// =============================================================================
// Show
// =============================================================================

/// A rendering of outcomes built from renderings of both payloads.
///
/// The output is `failure(<e>)` or `success(<a>)`, matching the `Display`
/// form of [`Outcome`].
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, OutcomeShow};
/// use outcome::typeclass::{DebugShow, DisplayShow, Show};
///
/// let show = OutcomeShow::new(DebugShow, DisplayShow);
/// let failed: Outcome<&str, i32> = Outcome::fail("boom");
/// let succeeded: Outcome<&str, i32> = Outcome::succeed(3);
/// assert_eq!(show.show(&failed), "failure(\"boom\")");
/// assert_eq!(show.show(&succeeded), "success(3)");
/// ```
#[derive(Clone, Copy, Default)]
pub struct OutcomeShow<SE, SA> {
    failure: SE,
    success: SA,
}

impl<SE, SA> OutcomeShow<SE, SA> {
    /// Builds an outcome rendering from a failure and a success rendering.
    pub const fn new(failure: SE, success: SA) -> Self {
        Self { failure, success }
    }
}

impl<E, A, SE, SA> Show<Outcome<E, A>> for OutcomeShow<SE, SA>
where
    SE: Show<E>,
    SA: Show<A>,
{
    fn show(&self, value: &Outcome<E, A>) -> String {
        match value {
            Outcome::Failure(error) => format!("failure({})", self.failure.show(error)),
            Outcome::Success(success) => format!("success({})", self.success.show(success)),
        }
    }
}

impl<SE, SA> fmt::Debug for OutcomeShow<SE, SA> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("OutcomeShow")
    }
}

// =============================================================================
// Semigroup / Monoid
// =============================================================================

/// Successes combine their payloads; the first failure wins.
///
/// - `Success(a).combine(Success(b))` = `Success(a.combine(b))`
/// - `Failure(e).combine(_)` = `Failure(e)`
/// - `Success(_).combine(Failure(e))` = `Failure(e)`
impl<E, A: Semigroup> Semigroup for Outcome<E, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, A::combine)
    }
}

/// The identity is a success holding the payload's identity.
impl<E, A: Monoid> Monoid for Outcome<E, A> {
    fn empty() -> Self {
        Self::Success(A::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{DisplayShow, PartialEqEquivalence};
    use rstest::rstest;

    fn same_parity(a: &i32, b: &i32) -> bool {
        a % 2 == b % 2
    }

    #[rstest]
    #[case(Outcome::Success(2), Outcome::Success(4), true)]
    #[case(Outcome::Success(2), Outcome::Success(3), false)]
    #[case(Outcome::Failure(1), Outcome::Failure(7), true)]
    #[case(Outcome::Failure(1), Outcome::Failure(2), false)]
    #[case(Outcome::Failure(2), Outcome::Success(2), false)]
    #[case(Outcome::Success(2), Outcome::Failure(2), false)]
    fn equivalence_compares_matching_variants(
        #[case] left: Outcome<i32, i32>,
        #[case] right: Outcome<i32, i32>,
        #[case] expected: bool,
    ) {
        let equivalence = OutcomeEquivalence::new(same_parity, same_parity);
        assert_eq!(equivalence.equals(&left, &right), expected);
    }

    #[rstest]
    fn equivalence_with_partial_eq_matches_derived_eq() {
        let equivalence = OutcomeEquivalence::new(PartialEqEquivalence, PartialEqEquivalence);
        let left: Outcome<&str, i32> = Outcome::succeed(1);
        let right: Outcome<&str, i32> = Outcome::succeed(1);
        assert_eq!(equivalence.equals(&left, &right), left == right);
    }

    #[rstest]
    fn show_uses_payload_renderings() {
        let show = OutcomeShow::new(|error: &i32| format!("E{error}"), DisplayShow);
        let failed: Outcome<i32, &str> = Outcome::fail(404);
        let succeeded: Outcome<i32, &str> = Outcome::succeed("ok");
        assert_eq!(show.show(&failed), "failure(E404)");
        assert_eq!(show.show(&succeeded), "success(ok)");
    }

    #[rstest]
    fn show_agrees_with_display() {
        let show = OutcomeShow::new(DisplayShow, DisplayShow);
        let value: Outcome<&str, i32> = Outcome::fail("e");
        assert_eq!(show.show(&value), value.to_string());
    }

    #[rstest]
    #[case(Outcome::Success("a"), Outcome::Success("b"), Outcome::Success("ab"))]
    #[case(Outcome::Failure(1), Outcome::Success("b"), Outcome::Failure(1))]
    #[case(Outcome::Success("a"), Outcome::Failure(2), Outcome::Failure(2))]
    #[case(Outcome::Failure(1), Outcome::Failure(2), Outcome::Failure(1))]
    fn semigroup_first_failure_wins(
        #[case] left: Outcome<i32, &str>,
        #[case] right: Outcome<i32, &str>,
        #[case] expected: Outcome<i32, &str>,
    ) {
        let left = left.map(String::from);
        let right = right.map(String::from);
        assert_eq!(left.combine(right), expected.map(String::from));
    }

    #[rstest]
    fn monoid_combine_all_stops_at_failure() {
        let items: Vec<Outcome<&str, Vec<i32>>> = vec![
            Outcome::succeed(vec![1]),
            Outcome::fail("broken"),
            Outcome::succeed(vec![2]),
        ];
        assert_eq!(Outcome::combine_all(items), Outcome::Failure("broken"));
    }

    #[rstest]
    fn monoid_combine_all_of_successes() {
        let items: Vec<Outcome<&str, Vec<i32>>> =
            vec![Outcome::succeed(vec![1]), Outcome::succeed(vec![2, 3])];
        assert_eq!(Outcome::combine_all(items), Outcome::Success(vec![1, 2, 3]));
    }
}
