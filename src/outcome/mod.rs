//! The `Outcome` type - a value that is either a failure or a success.
//!
//! `Outcome<E, A>` is a two-variant tagged union. `Failure(E)` carries a
//! domain failure, `Success(A)` carries a result. Every combinator in this
//! module produces a new `Outcome` and never inspects the payloads beyond
//! what its contract states.
//!
//! The type parameters are ordered failure-first, which makes the success
//! branch the "mapped" one for `map`, `flat_map` and friends.
//!
//! # Combinator families
//!
//! - Core: [`Outcome::fail`], [`Outcome::succeed`], [`Outcome::fold`], [`Outcome::swap`]
//! - Functor: [`Outcome::map`], [`Outcome::map_error`], [`Outcome::map_both`]
//! - Monad: [`Outcome::flat_map`], [`Outcome::flatten`], [`Outcome::tail_rec`],
//!   [`Outcome::zip_left`], [`Outcome::zip_right`]
//! - Applicative: [`Outcome::ap`], [`Outcome::map2`], [`lift2`], [`lift3`],
//!   [`ValidatedApplicative`]
//! - Alt: [`Outcome::or_else`], [`ValidatedAlt`]
//! - Traversal over sequences: [`traverse_array`], [`sequence_array`]
//! - Filtering: [`Outcome::compact`], [`Outcome::separate`], [`Outcome::filter_or_else`]
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! let failed = parse("x").flat_map(|n| Outcome::succeed(n * 2));
//! assert!(failed.is_failure());
//! ```

mod array;
mod filterable;
mod interop;
mod validated;

#[cfg(feature = "typeclass")]
mod instances;

pub use array::{sequence_array, traverse_array, traverse_array_with_index};
pub use interop::PanicError;
pub use validated::{ValidatedAlt, ValidatedApplicative, validated_alt, validated_applicative};

#[cfg(feature = "typeclass")]
pub use instances::{OutcomeEquivalence, OutcomeShow};

use std::fmt;

/// A value that is either a `Failure(E)` or a `Success(A)`.
///
/// # Type Parameters
///
/// * `E` - The failure payload type
/// * `A` - The success payload type
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
///
/// let success: Outcome<String, i32> = Outcome::succeed(42);
/// let failure: Outcome<String, i32> = Outcome::fail("boom".to_string());
///
/// assert_eq!(success.map(|x| x + 1), Outcome::Success(43));
/// assert_eq!(failure.map(|x| x + 1), Outcome::Failure("boom".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<E, A> {
    /// The failure variant, carrying the failure payload.
    Failure(E),
    /// The success variant, carrying the success payload.
    Success(A),
}

static_assertions::assert_impl_all!(Outcome<String, i32>: Send, Sync, Clone);

impl<E, A> Outcome<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Failure` holding `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::fail("missing");
    /// assert!(failure.is_failure());
    /// ```
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::Failure(error)
    }

    /// Creates a `Success` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::succeed(1);
    /// assert!(success.is_success());
    /// ```
    #[inline]
    pub const fn succeed(value: A) -> Self {
        Self::Success(value)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Eliminates the `Outcome` by calling exactly one of the two handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<String, i32> = Outcome::succeed(7);
    /// let rendered = success.fold(|error| format!("error: {error}"), |n| format!("value: {n}"));
    /// assert_eq!(rendered, "value: 7");
    /// ```
    #[inline]
    pub fn fold<B, F, G>(self, on_failure: F, on_success: G) -> B
    where
        F: FnOnce(E) -> B,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    /// Alias for [`Outcome::fold`].
    #[inline]
    pub fn match_with<B, F, G>(self, on_failure: F, on_success: G) -> B
    where
        F: FnOnce(E) -> B,
        G: FnOnce(A) -> B,
    {
        self.fold(on_failure, on_success)
    }

    /// Exchanges the roles of the two payloads.
    ///
    /// `swap` is an involution: `outcome.swap().swap() == outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::fail("e");
    /// assert_eq!(failure.swap(), Outcome::Success("e"));
    /// ```
    #[inline]
    pub fn swap(self) -> Outcome<A, E> {
        match self {
            Self::Failure(error) => Outcome::Success(error),
            Self::Success(value) => Outcome::Failure(value),
        }
    }

    /// Returns the failure payload, discarding a success.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Returns the success payload, discarding a failure.
    #[inline]
    pub fn success(self) -> Option<A> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Returns the success payload or computes one from the failure.
    #[inline]
    pub fn get_or_else<F>(self, on_failure: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => value,
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn get_or(self, default: A) -> A {
        self.get_or_else(|_| default)
    }

    /// Returns `true` if this is a `Success` whose payload satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Failure(_) => false,
            Self::Success(value) => predicate(value),
        }
    }

    /// Returns `true` if this is a `Success` equal to `expected`.
    #[inline]
    pub fn contains(&self, expected: &A) -> bool
    where
        A: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    // =========================================================================
    // Functor
    // =========================================================================

    /// Transforms the success payload. Failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::succeed(2);
    /// assert_eq!(success.map(|n| n * 10), Outcome::Success(20));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }

    /// Transforms the failure payload. Successes pass through unchanged.
    #[inline]
    pub fn map_error<G, F>(self, function: F) -> Outcome<G, A>
    where
        F: FnOnce(E) -> G,
    {
        self.map_both(function, |value| value)
    }

    /// Transforms whichever payload is present. Exactly one function runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::fail("abc");
    /// assert_eq!(failure.map_both(|e| e.len(), |n| n * 2), Outcome::Failure(3));
    /// ```
    #[inline]
    pub fn map_both<G, B, F, H>(self, on_failure: F, on_success: H) -> Outcome<G, B>
    where
        F: FnOnce(E) -> G,
        H: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
            Self::Success(value) => Outcome::Success(on_success(value)),
        }
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// A `Failure` short-circuits: `function` is not called and the failure
    /// is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let half = |n: i32| {
    ///     if n % 2 == 0 { Outcome::succeed(n / 2) } else { Outcome::fail("odd") }
    /// };
    ///
    /// assert_eq!(Outcome::succeed(8).flat_map(half).flat_map(half), Outcome::Success(2));
    /// assert_eq!(Outcome::succeed(6).flat_map(half).flat_map(half), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => function(value),
        }
    }

    /// Alias for [`Outcome::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        self.flat_map(function)
    }

    /// Chains a computation whose failure type converts into a wider one.
    ///
    /// Both failure types are widened into `W` through `From`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Wide { Parse(u8), Range(u16) }
    /// impl From<u8> for Wide { fn from(code: u8) -> Self { Wide::Parse(code) } }
    /// impl From<u16> for Wide { fn from(code: u16) -> Self { Wide::Range(code) } }
    ///
    /// let parsed: Outcome<u8, i32> = Outcome::succeed(500);
    /// let checked: Outcome<Wide, i32> =
    ///     parsed.flat_map_widen(|n| if n < 100 { Outcome::succeed(n) } else { Outcome::<u16, i32>::fail(100) });
    /// assert_eq!(checked, Outcome::Failure(Wide::Range(100)));
    /// ```
    #[inline]
    pub fn flat_map_widen<W, E2, B, F>(self, function: F) -> Outcome<W, B>
    where
        F: FnOnce(A) -> Outcome<E2, B>,
        W: From<E> + From<E2>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(W::from(error)),
            Self::Success(value) => function(value).map_error(W::from),
        }
    }

    /// Runs `function` for its outcome but keeps the original success payload.
    ///
    /// A failure from `function` replaces the success.
    #[inline]
    #[must_use]
    pub fn flat_tap<B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Outcome<E, B>,
    {
        match self {
            Self::Failure(error) => Self::Failure(error),
            Self::Success(value) => match function(&value) {
                Outcome::Failure(error) => Self::Failure(error),
                Outcome::Success(_) => Self::Success(value),
            },
        }
    }

    /// Sequences two outcomes, discarding the first success payload.
    #[inline]
    pub fn then<B>(self, next: Outcome<E, B>) -> Outcome<E, B> {
        self.flat_map(|_| next)
    }

    /// Keeps this success payload after checking `other`.
    ///
    /// `self` is examined first: its failure wins. Otherwise `other`'s
    /// failure is returned, and if both succeed `self`'s payload is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let first: Outcome<&str, i32> = Outcome::succeed(1);
    /// assert_eq!(first.zip_left(Outcome::<&str, &str>::succeed("ignored")), Outcome::Success(1));
    ///
    /// let both: Outcome<&str, i32> = Outcome::fail("a");
    /// assert_eq!(both.zip_left(Outcome::<&str, i32>::fail("b")), Outcome::Failure("a"));
    /// ```
    #[inline]
    #[must_use]
    pub fn zip_left<B>(self, other: Outcome<E, B>) -> Self {
        self.zip_left_with(|| other)
    }

    /// Like [`Outcome::zip_left`], but `other` is only produced when `self` succeeds.
    #[inline]
    #[must_use]
    pub fn zip_left_with<B, F>(self, other: F) -> Self
    where
        F: FnOnce() -> Outcome<E, B>,
    {
        match self {
            Self::Failure(error) => Self::Failure(error),
            Self::Success(value) => match other() {
                Outcome::Failure(error) => Self::Failure(error),
                Outcome::Success(_) => Self::Success(value),
            },
        }
    }

    /// Keeps `other`'s success payload after checking this outcome.
    ///
    /// `self`'s failure wins over `other`'s.
    #[inline]
    pub fn zip_right<B>(self, other: Outcome<E, B>) -> Outcome<E, B> {
        self.zip_right_with(|| other)
    }

    /// Like [`Outcome::zip_right`], but `other` is only produced when `self` succeeds.
    #[inline]
    pub fn zip_right_with<B, F>(self, other: F) -> Outcome<E, B>
    where
        F: FnOnce() -> Outcome<E, B>,
    {
        self.flat_map(|_| other())
    }

    /// Pairs two success payloads, fail-fast left to right.
    #[inline]
    pub fn zip<B>(self, other: Outcome<E, B>) -> Outcome<E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Stack-safe monadic recursion.
    ///
    /// `step` is called with the current state. An outer `Failure` stops the
    /// loop with that failure. An inner `Failure(next)` continues with `next`,
    /// and an inner `Success(done)` stops with `Success(done)`.
    ///
    /// The loop runs in constant stack space regardless of the iteration count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// // Sum 1..=n without recursion on the call stack.
    /// let total: Outcome<String, u64> = Outcome::tail_rec((1_000_000_u64, 0_u64), |(n, sum)| {
    ///     if n == 0 {
    ///         Outcome::succeed(Outcome::Success(sum))
    ///     } else {
    ///         Outcome::succeed(Outcome::Failure((n - 1, sum + n)))
    ///     }
    /// });
    /// assert_eq!(total, Outcome::Success(500_000_500_000));
    /// ```
    pub fn tail_rec<S, F>(initial: S, mut step: F) -> Self
    where
        F: FnMut(S) -> Outcome<E, Outcome<S, A>>,
    {
        let mut state = initial;
        loop {
            match step(state) {
                Outcome::Failure(error) => return Self::Failure(error),
                Outcome::Success(Outcome::Failure(next)) => state = next,
                Outcome::Success(Outcome::Success(done)) => return Self::Success(done),
            }
        }
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines two outcomes with a binary function, fail-fast left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let a: Outcome<&str, i32> = Outcome::succeed(1);
    /// let b: Outcome<&str, i32> = Outcome::succeed(2);
    /// assert_eq!(a.map2(b, |x, y| x + y), Outcome::Success(3));
    /// ```
    #[inline]
    pub fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
        }
    }

    /// Combines three outcomes with a ternary function, fail-fast left to right.
    #[inline]
    pub fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        function: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
        }
    }

    // =========================================================================
    // Alt
    // =========================================================================

    /// Returns `self` if it is a `Success`, otherwise `fallback` verbatim.
    ///
    /// Under repeated chaining the last failure wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let first: Outcome<&str, i32> = Outcome::fail("a");
    /// assert_eq!(first.or_else(Outcome::<&str, i32>::fail("b")), Outcome::Failure("b"));
    /// assert_eq!(first.or_else(Outcome::<&str, i32>::succeed(2)), Outcome::Success(2));
    /// assert_eq!(
    ///     Outcome::<&str, i32>::succeed(1).or_else(Outcome::<&str, i32>::fail("b")),
    ///     Outcome::Success(1)
    /// );
    /// ```
    #[inline]
    pub fn or_else<E2>(self, fallback: Outcome<E2, A>) -> Outcome<E2, A> {
        self.or_else_with(|| fallback)
    }

    /// Like [`Outcome::or_else`], but the fallback is only produced on failure.
    #[inline]
    pub fn or_else_with<E2, F>(self, fallback: F) -> Outcome<E2, A>
    where
        F: FnOnce() -> Outcome<E2, A>,
    {
        match self {
            Self::Failure(_) => fallback(),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Recovers from a failure with a handler that sees the failure payload.
    #[inline]
    pub fn recover_with<E2, F>(self, handler: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> Outcome<E2, A>,
    {
        match self {
            Self::Failure(error) => handler(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }
}

// =============================================================================
// Nested and function-carrying outcomes
// =============================================================================

impl<E, A> Outcome<E, Outcome<E, A>> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::succeed(Outcome::fail("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<E, A> {
        self.flat_map(|inner| inner)
    }
}

impl<E, F> Outcome<E, F> {
    /// Applies a wrapped function to a wrapped value, fail-fast left to right.
    ///
    /// If the function side is a `Failure` it is returned regardless of
    /// `argument`. Otherwise `argument`'s failure is returned, and if both
    /// succeed the function is applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let function: Outcome<&str, fn(i32) -> i32> = Outcome::succeed(|n| n + 1);
    /// assert_eq!(function.ap(Outcome::succeed(41)), Outcome::Success(42));
    ///
    /// let failed: Outcome<&str, fn(i32) -> i32> = Outcome::fail("e1");
    /// assert_eq!(failed.ap(Outcome::fail("e2")), Outcome::Failure("e1"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, argument: Outcome<E, A>) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map2(argument, |function, value| function(value))
    }
}

impl<T> Outcome<T, T> {
    /// Extracts the payload when both branches share a type.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Failure(value) | Self::Success(value) => value,
        }
    }
}

// =============================================================================
// Lifting
// =============================================================================

/// Lifts a binary function into one over outcomes, fail-fast left to right.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, lift2};
///
/// let add = lift2(|a: i32, b: i32| a + b);
/// assert_eq!(add(Outcome::<&str, i32>::succeed(1), Outcome::succeed(2)), Outcome::Success(3));
/// assert_eq!(add(Outcome::fail("x"), Outcome::fail("y")), Outcome::Failure("x"));
/// ```
pub fn lift2<E, A, B, C, F>(function: F) -> impl Fn(Outcome<E, A>, Outcome<E, B>) -> Outcome<E, C>
where
    F: Fn(A, B) -> C,
{
    move |first, second| first.map2(second, &function)
}

/// Lifts a ternary function into one over outcomes, fail-fast left to right.
pub fn lift3<E, A, B, C, D, F>(
    function: F,
) -> impl Fn(Outcome<E, A>, Outcome<E, B>, Outcome<E, C>) -> Outcome<E, D>
where
    F: Fn(A, B, C) -> D,
{
    move |first, second, third| first.map3(second, third, &function)
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Outcome<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(error) => write!(formatter, "failure({error})"),
            Self::Success(value) => write!(formatter, "success({value})"),
        }
    }
}
