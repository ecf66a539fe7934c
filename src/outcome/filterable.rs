//! Filtering operations that turn "missing" signals into failures.
//!
//! `Outcome` has no empty element of its own, so every operation here takes
//! the failure payload to use when a success is filtered out.

use super::Outcome;

impl<E, A> Outcome<E, Option<A>> {
    /// Unwraps an optional success payload.
    ///
    /// `Success(None)` becomes `Failure(on_missing)`, `Success(Some(a))`
    /// becomes `Success(a)`, and failures propagate unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let missing: Outcome<&str, Option<i32>> = Outcome::succeed(None);
    /// assert_eq!(missing.compact("missing"), Outcome::Failure("missing"));
    ///
    /// let present: Outcome<&str, Option<i32>> = Outcome::succeed(Some(1));
    /// assert_eq!(present.compact("missing"), Outcome::Success(1));
    /// ```
    #[inline]
    pub fn compact(self, on_missing: E) -> Outcome<E, A> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(Some(value)) => Outcome::Success(value),
            Self::Success(None) => Outcome::Failure(on_missing),
        }
    }
}

impl<E: Clone, B, C> Outcome<E, Outcome<B, C>> {
    /// Splits a nested outcome into its two inner branches.
    ///
    /// - An outer `Failure(e)` appears in both halves.
    /// - An inner `Failure(b)` yields `(Success(b), Failure(on_missing))`.
    /// - An inner `Success(c)` yields `(Failure(on_missing), Success(c))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let inner_failure: Outcome<&str, Outcome<i32, char>> = Outcome::succeed(Outcome::fail(1));
    /// assert_eq!(
    ///     inner_failure.separate("none"),
    ///     (Outcome::Success(1), Outcome::Failure("none"))
    /// );
    /// ```
    pub fn separate(self, on_missing: E) -> (Outcome<E, B>, Outcome<E, C>) {
        match self {
            Self::Failure(error) => (Outcome::Failure(error.clone()), Outcome::Failure(error)),
            Self::Success(Outcome::Failure(left)) => {
                (Outcome::Success(left), Outcome::Failure(on_missing))
            }
            Self::Success(Outcome::Success(right)) => {
                (Outcome::Failure(on_missing), Outcome::Success(right))
            }
        }
    }
}

impl<E, A> Outcome<E, A> {
    /// Keeps a success only if it satisfies `predicate`.
    ///
    /// A rejected success becomes `Failure(on_false(&value))`; failures pass
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let positive = |n: &i32| *n > 0;
    /// let rejected: Outcome<String, i32> = Outcome::succeed(-1);
    /// assert_eq!(
    ///     rejected.filter_or_else(positive, |n| format!("{n} is not positive")),
    ///     Outcome::Failure("-1 is not positive".to_string())
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(&A) -> E,
    {
        match self {
            Self::Failure(error) => Self::Failure(error),
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(on_false(&value))
                }
            }
        }
    }

    /// Alias for [`Outcome::filter_or_else`] with a fixed failure payload.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P, on_false: E) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter_or_else(predicate, |_| on_false)
    }

    /// Narrows the success payload with a partial conversion.
    ///
    /// `refinement` returning `None` rejects the payload, which becomes
    /// `Failure(on_false(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let wide: Outcome<String, i64> = Outcome::succeed(300);
    /// let narrowed = wide.refine_or_else(|n| u8::try_from(*n).ok(), |n| format!("{n} out of range"));
    /// assert_eq!(narrowed, Outcome::Failure("300 out of range".to_string()));
    /// ```
    #[inline]
    pub fn refine_or_else<B, R, F>(self, refinement: R, on_false: F) -> Outcome<E, B>
    where
        R: FnOnce(&A) -> Option<B>,
        F: FnOnce(A) -> E,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => refinement(&value)
                .map_or_else(|| Outcome::Failure(on_false(value)), Outcome::Success),
        }
    }

    /// Maps and filters the success payload in one step.
    ///
    /// `function` returning `None` yields `Failure(on_missing)`.
    #[inline]
    pub fn filter_map<B, F>(self, function: F, on_missing: E) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.map(function).compact(on_missing)
    }

    /// Splits a success by `predicate` into `(rejected, accepted)`.
    ///
    /// The side that does not hold the payload receives `Failure(on_missing)`.
    /// An existing failure appears in both halves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let even: Outcome<&str, i32> = Outcome::succeed(4);
    /// assert_eq!(
    ///     even.partition(|n| n % 2 == 0, "none"),
    ///     (Outcome::Failure("none"), Outcome::Success(4))
    /// );
    /// ```
    pub fn partition<P>(self, predicate: P, on_missing: E) -> (Self, Self)
    where
        E: Clone,
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Failure(error) => (Self::Failure(error.clone()), Self::Failure(error)),
            Self::Success(value) => {
                if predicate(&value) {
                    (Self::Failure(on_missing), Self::Success(value))
                } else {
                    (Self::Success(value), Self::Failure(on_missing))
                }
            }
        }
    }

    /// Splits a success with a function choosing the side.
    ///
    /// `function` returning `Failure(b)` puts `b` on the left,
    /// `Success(c)` puts `c` on the right.
    pub fn partition_map<B, C, F>(self, function: F, on_missing: E) -> (Outcome<E, B>, Outcome<E, C>)
    where
        E: Clone,
        F: FnOnce(A) -> Outcome<B, C>,
    {
        self.map(function).separate(on_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::Success(None), Outcome::Failure("missing"))]
    #[case(Outcome::Success(Some(7)), Outcome::Success(7))]
    #[case(Outcome::Failure("e"), Outcome::Failure("e"))]
    fn compact_cases(
        #[case] input: Outcome<&'static str, Option<i32>>,
        #[case] expected: Outcome<&'static str, i32>,
    ) {
        assert_eq!(input.compact("missing"), expected);
    }

    #[rstest]
    fn separate_duplicates_outer_failure() {
        let outer: Outcome<&str, Outcome<i32, char>> = Outcome::fail("outer");
        assert_eq!(
            outer.separate("none"),
            (Outcome::Failure("outer"), Outcome::Failure("outer"))
        );
    }

    #[rstest]
    fn separate_places_inner_success_on_the_right() {
        let inner: Outcome<&str, Outcome<i32, char>> = Outcome::succeed(Outcome::succeed('c'));
        assert_eq!(
            inner.separate("none"),
            (Outcome::Failure("none"), Outcome::Success('c'))
        );
    }

    #[rstest]
    #[case(Outcome::Success(2), Outcome::Success(2))]
    #[case(Outcome::Success(-2), Outcome::Failure("negative"))]
    #[case(Outcome::Failure("earlier"), Outcome::Failure("earlier"))]
    fn filter_cases(
        #[case] input: Outcome<&'static str, i32>,
        #[case] expected: Outcome<&'static str, i32>,
    ) {
        assert_eq!(input.filter(|n| *n >= 0, "negative"), expected);
    }

    #[rstest]
    fn filter_map_rejects_none() {
        let input: Outcome<&str, &str> = Outcome::succeed("abc");
        assert_eq!(input.filter_map(|s| s.parse::<i32>().ok(), "nan"), Outcome::Failure("nan"));
    }

    #[rstest]
    fn partition_rejected_goes_left() {
        let odd: Outcome<&str, i32> = Outcome::succeed(3);
        assert_eq!(
            odd.partition(|n| n % 2 == 0, "none"),
            (Outcome::Success(3), Outcome::Failure("none"))
        );
    }

    #[rstest]
    fn partition_map_routes_by_inner_branch() {
        let input: Outcome<&str, i32> = Outcome::succeed(5);
        let (left, right) = input.partition_map(
            |n| if n > 3 { Outcome::succeed(n * 2) } else { Outcome::fail(n) },
            "none",
        );
        assert_eq!(left, Outcome::<&str, i32>::Failure("none"));
        assert_eq!(right, Outcome::Success(10));
    }

    #[rstest]
    fn refine_passes_narrowed_value() {
        let input: Outcome<String, i64> = Outcome::succeed(42);
        let narrowed = input.refine_or_else(|n| u8::try_from(*n).ok(), |n| n.to_string());
        assert_eq!(narrowed, Outcome::Success(42_u8));
    }
}
