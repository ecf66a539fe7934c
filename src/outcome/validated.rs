//! Error-accumulating instances for `Outcome`.
//!
//! The default `ap` and `or_else` keep a single failure. The instances here
//! take a combining function for failure payloads and use it whenever both
//! sides fail, so independent validation errors are collected instead of
//! dropped. The combining function must be associative; it is not assumed
//! to be commutative, so operand order is part of each contract.

use super::Outcome;

#[cfg(feature = "typeclass")]
use crate::typeclass::Semigroup;

/// An applicative instance for `Outcome` that accumulates failures.
///
/// Built with [`validated_applicative`] or [`ValidatedApplicative::from_semigroup`].
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, validated_applicative};
///
/// let validation = validated_applicative(|a: String, b: String| format!("{a}; {b}"));
///
/// let function: Outcome<String, fn(i32) -> i32> = Outcome::fail("a".to_string());
/// let argument: Outcome<String, i32> = Outcome::fail("b".to_string());
/// assert_eq!(validation.ap(function, argument), Outcome::Failure("a; b".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValidatedApplicative<C> {
    combine: C,
}

/// Creates a [`ValidatedApplicative`] from a failure-combining function.
pub const fn validated_applicative<C>(combine: C) -> ValidatedApplicative<C> {
    ValidatedApplicative { combine }
}

impl<C> ValidatedApplicative<C> {
    /// Lifts a value into a success.
    #[inline]
    pub const fn pure<E, A>(&self, value: A) -> Outcome<E, A> {
        Outcome::Success(value)
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// When both sides fail the result is
    /// `Failure(combine(function_failure, argument_failure))`. When only one
    /// side fails its failure is returned.
    pub fn ap<E, F, A, B>(&self, function: Outcome<E, F>, argument: Outcome<E, A>) -> Outcome<E, B>
    where
        C: Fn(E, E) -> E,
        F: FnOnce(A) -> B,
    {
        self.map2(function, argument, |function, value| function(value))
    }

    /// Combines two outcomes, accumulating both failures left to right.
    pub fn map2<E, A, B, R, F>(&self, first: Outcome<E, A>, second: Outcome<E, B>, function: F) -> Outcome<E, R>
    where
        C: Fn(E, E) -> E,
        F: FnOnce(A, B) -> R,
    {
        match (first, second) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Outcome::Failure(left), Outcome::Failure(right)) => {
                Outcome::Failure((self.combine)(left, right))
            }
            (Outcome::Failure(error), Outcome::Success(_))
            | (Outcome::Success(_), Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Combines three outcomes, accumulating failures left to right.
    pub fn map3<E, A, B, D, R, F>(
        &self,
        first: Outcome<E, A>,
        second: Outcome<E, B>,
        third: Outcome<E, D>,
        function: F,
    ) -> Outcome<E, R>
    where
        C: Fn(E, E) -> E,
        F: FnOnce(A, B, D) -> R,
    {
        let pair = self.map2(first, second, |a, b| (a, b));
        self.map2(pair, third, |(a, b), d| function(a, b, d))
    }

    /// Applies `function` to every element, collecting all failures.
    ///
    /// Unlike [`super::traverse_array`], every element is evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Outcome, validated_applicative};
    ///
    /// let validation = validated_applicative(|mut a: Vec<String>, b: Vec<String>| {
    ///     a.extend(b);
    ///     a
    /// });
    /// let positive = |n: i32| {
    ///     if n > 0 { Outcome::succeed(n) } else { Outcome::fail(vec![format!("{n} <= 0")]) }
    /// };
    ///
    /// assert_eq!(
    ///     validation.traverse(vec![1, -2, -3], positive),
    ///     Outcome::Failure(vec!["-2 <= 0".to_string(), "-3 <= 0".to_string()])
    /// );
    /// ```
    pub fn traverse<I, E, B, F>(&self, items: I, mut function: F) -> Outcome<E, Vec<B>>
    where
        C: Fn(E, E) -> E,
        I: IntoIterator,
        F: FnMut(I::Item) -> Outcome<E, B>,
    {
        items
            .into_iter()
            .fold(Outcome::Success(Vec::new()), |accumulated, item| {
                self.map2(accumulated, function(item), |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }

    /// Turns a sequence of outcomes into an outcome of a sequence, collecting all failures.
    pub fn sequence<I, E, A>(&self, items: I) -> Outcome<E, Vec<A>>
    where
        C: Fn(E, E) -> E,
        I: IntoIterator<Item = Outcome<E, A>>,
    {
        self.traverse(items, |outcome| outcome)
    }
}

#[cfg(feature = "typeclass")]
impl<E: Semigroup> ValidatedApplicative<fn(E, E) -> E> {
    /// Creates an instance that combines failures with `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Outcome, ValidatedApplicative};
    ///
    /// type Errors = Vec<String>;
    ///
    /// let validation = ValidatedApplicative::<fn(Errors, Errors) -> Errors>::from_semigroup();
    /// let combined = validation.map2(
    ///     Outcome::<Errors, i32>::fail(vec!["a".to_string()]),
    ///     Outcome::<Errors, i32>::fail(vec!["b".to_string()]),
    ///     |x, y| x + y,
    /// );
    /// assert_eq!(combined, Outcome::Failure(vec!["a".to_string(), "b".to_string()]));
    /// ```
    pub const fn from_semigroup() -> Self {
        Self {
            combine: <E as Semigroup>::combine,
        }
    }
}

/// An alt instance for `Outcome` that accumulates failures.
///
/// When both alternatives fail the result is
/// `Failure(combine(fallback_failure, first_failure))`: the fallback's failure
/// is the left operand.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, validated_alt};
///
/// let alt = validated_alt(|a: String, b: String| format!("{a}{b}"));
/// let first: Outcome<String, i32> = Outcome::fail("a".to_string());
/// let fallback: Outcome<String, i32> = Outcome::fail("b".to_string());
/// assert_eq!(alt.or_else(first, fallback), Outcome::Failure("ba".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValidatedAlt<C> {
    combine: C,
}

/// Creates a [`ValidatedAlt`] from a failure-combining function.
pub const fn validated_alt<C>(combine: C) -> ValidatedAlt<C> {
    ValidatedAlt { combine }
}

impl<C> ValidatedAlt<C> {
    /// Returns `first` if it succeeds, otherwise `fallback`, combining failures.
    #[inline]
    pub fn or_else<E, A>(&self, first: Outcome<E, A>, fallback: Outcome<E, A>) -> Outcome<E, A>
    where
        C: Fn(E, E) -> E,
    {
        self.or_else_with(first, || fallback)
    }

    /// Like [`ValidatedAlt::or_else`], but the fallback is only produced when `first` fails.
    pub fn or_else_with<E, A, F>(&self, first: Outcome<E, A>, fallback: F) -> Outcome<E, A>
    where
        C: Fn(E, E) -> E,
        F: FnOnce() -> Outcome<E, A>,
    {
        match first {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(first_error) => match fallback() {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(fallback_error) => {
                    Outcome::Failure((self.combine)(fallback_error, first_error))
                }
            },
        }
    }
}

#[cfg(feature = "typeclass")]
impl<E: Semigroup> ValidatedAlt<fn(E, E) -> E> {
    /// Creates an instance that combines failures with `Semigroup::combine`.
    pub const fn from_semigroup() -> Self {
        Self {
            combine: <E as Semigroup>::combine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SEPARATOR: &str = " | ";

    fn joined(first: String, second: String) -> String {
        format!("{first}{SEPARATOR}{second}")
    }

    #[rstest]
    fn validated_ap_combines_both_failures() {
        let validation = validated_applicative(joined);
        let function: Outcome<String, fn(i32) -> i32> = Outcome::fail("a".to_string());
        let argument: Outcome<String, i32> = Outcome::fail("b".to_string());
        assert_eq!(validation.ap(function, argument), Outcome::Failure("a | b".to_string()));
    }

    #[rstest]
    #[case(Outcome::Failure("a".to_string()), Outcome::Success(1), Outcome::Failure("a".to_string()))]
    #[case(Outcome::Success(2), Outcome::Failure("b".to_string()), Outcome::Failure("b".to_string()))]
    #[case(Outcome::Success(2), Outcome::Success(3), Outcome::Success(5))]
    fn validated_map2_single_failure_passes_through(
        #[case] first: Outcome<String, i32>,
        #[case] second: Outcome<String, i32>,
        #[case] expected: Outcome<String, i32>,
    ) {
        let validation = validated_applicative(joined);
        assert_eq!(validation.map2(first, second, |a, b| a + b), expected);
    }

    #[rstest]
    fn validated_map3_accumulates_in_order() {
        let validation = validated_applicative(joined);
        let result = validation.map3(
            Outcome::<String, i32>::fail("x".to_string()),
            Outcome::<String, i32>::succeed(1),
            Outcome::<String, i32>::fail("z".to_string()),
            |a, b, c| a + b + c,
        );
        assert_eq!(result, Outcome::Failure("x | z".to_string()));
    }

    #[rstest]
    fn validated_traverse_evaluates_every_element() {
        let validation = validated_applicative(joined);
        let mut seen = Vec::new();
        let result = validation.traverse(["1", "a", "b"], |item| {
            seen.push(item);
            Outcome::from_result(item.parse::<i32>().map_err(|_| format!("bad {item}")))
        });
        assert_eq!(result, Outcome::Failure("bad a | bad b".to_string()));
        assert_eq!(seen, vec!["1", "a", "b"]);
    }

    #[rstest]
    fn validated_sequence_succeeds_when_all_succeed() {
        let validation = validated_applicative(joined);
        let items: Vec<Outcome<String, i32>> = vec![Outcome::succeed(1), Outcome::succeed(2)];
        assert_eq!(validation.sequence(items), Outcome::Success(vec![1, 2]));
    }

    #[rstest]
    fn validated_alt_puts_fallback_failure_first() {
        let alt = validated_alt(joined);
        let result = alt.or_else(
            Outcome::<String, i32>::fail("self".to_string()),
            Outcome::fail("fallback".to_string()),
        );
        assert_eq!(result, Outcome::Failure("fallback | self".to_string()));
    }

    #[rstest]
    #[case(Outcome::Success(1), Outcome::Failure("b".to_string()), Outcome::Success(1))]
    #[case(Outcome::Failure("a".to_string()), Outcome::Success(2), Outcome::Success(2))]
    fn validated_alt_success_wins(
        #[case] first: Outcome<String, i32>,
        #[case] fallback: Outcome<String, i32>,
        #[case] expected: Outcome<String, i32>,
    ) {
        assert_eq!(validated_alt(joined).or_else(first, fallback), expected);
    }

    #[rstest]
    fn validated_alt_with_skips_fallback_on_success() {
        let alt = validated_alt(joined);
        let result = alt.or_else_with(Outcome::<String, i32>::succeed(1), || panic!("must not run"));
        assert_eq!(result, Outcome::Success(1));
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn from_semigroup_concatenates_vectors() {
        let alt = ValidatedAlt::<fn(Vec<i32>, Vec<i32>) -> Vec<i32>>::from_semigroup();
        let result = alt.or_else(Outcome::<Vec<i32>, ()>::fail(vec![1]), Outcome::fail(vec![2]));
        assert_eq!(result, Outcome::Failure(vec![2, 1]));
    }
}
