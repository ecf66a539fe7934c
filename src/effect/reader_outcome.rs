//! `ReaderOutcome` - an outcome that depends on a read-only environment.
//!
//! A `ReaderOutcome<R, E, A>` wraps a function `R -> Outcome<E, A>`. Composing
//! two of them hands the same environment to both and stops at the first
//! failure, so a chain of configuration-dependent validations reads as a
//! plain sequence.
//!
//! # Laws
//!
//! For every environment `r`, `ReaderOutcome` satisfies the `Outcome` laws
//! pointwise:
//!
//! - `m.fmap(|x| x).run(r) == m.run(r)`
//! - `ReaderOutcome::succeed(a).flat_map(f).run(r) == f(a).run(r)`
//! - `m.flat_map(ReaderOutcome::succeed).run(r) == m.run(r)`
//! - `ReaderOutcome::local(|r| r, m).run(r) == m.run(r)`
//!
//! # Note on Type Classes
//!
//! Like the other lifted types, `ReaderOutcome` offers `fmap`, `flat_map` and
//! friends as inherent methods. The wrapped `Rc<dyn Fn>` needs `'static`
//! payloads, which the generic traits in [`crate::typeclass`] do not demand.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::effect::ReaderOutcome;
//!
//! let port: ReaderOutcome<&'static str, String, u16> = ReaderOutcome::new(|raw: &str| {
//!     Outcome::from_result(raw.parse::<u16>().map_err(|error| error.to_string()))
//! });
//! let address = port.fmap(|port| format!("localhost:{port}"));
//!
//! assert_eq!(address.run("8080"), Outcome::Success("localhost:8080".to_string()));
//! assert!(address.run("http").is_failure());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::Outcome;
use crate::outcome::traverse_array;

/// A computation that reads an environment `R` and succeeds with `A` or
/// fails with `E`.
///
/// `ReaderOutcome` is cheap to clone: clones share the wrapped function.
pub struct ReaderOutcome<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> Outcome<E, A>>,
}

static_assertions::assert_not_impl_any!(ReaderOutcome<i32, String, i32>: Send, Sync);

impl<R, E, A> ReaderOutcome<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
{
    /// Creates a `ReaderOutcome` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> Outcome<E, A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    ///
    /// A reader can be run any number of times.
    pub fn run(&self, environment: R) -> Outcome<E, A> {
        (self.run_function)(environment)
    }

    /// A computation that ignores the environment and succeeds with `value`.
    pub fn succeed(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Outcome::Success(value.clone()))
    }

    /// A computation that ignores the environment and fails with `error`.
    pub fn fail(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |_| Outcome::Failure(error.clone()))
    }

    /// Lifts a plain outcome, ignoring the environment.
    pub fn from_outcome(outcome: Outcome<E, A>) -> Self
    where
        E: Clone,
        A: Clone,
    {
        Self::new(move |_| outcome.clone())
    }

    /// Succeeds with a projection of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::effect::ReaderOutcome;
    ///
    /// let length: ReaderOutcome<String, (), usize> = ReaderOutcome::asks(|s: String| s.len());
    /// assert_eq!(length.run("four".to_string()), Outcome::Success(4));
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(move |environment| Outcome::Success(projection(environment)))
    }

    /// Runs `computation` with an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::effect::ReaderOutcome;
    ///
    /// let base: ReaderOutcome<i32, (), i32> = ReaderOutcome::ask();
    /// let shifted = ReaderOutcome::local(|n| n + 100, base);
    /// assert_eq!(shifted.run(1), Outcome::Success(101));
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let inner = computation.run_function;
        Self::new(move |environment| inner(modifier(environment)))
    }

    /// Maps the success payload.
    pub fn fmap<B, F>(self, function: F) -> ReaderOutcome<R, E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let inner = self.run_function;
        ReaderOutcome::new(move |environment| inner(environment).map(&function))
    }

    /// Maps the failure payload.
    pub fn map_error<E2, F>(self, function: F) -> ReaderOutcome<R, E2, A>
    where
        F: Fn(E) -> E2 + 'static,
        E2: 'static,
    {
        let inner = self.run_function;
        ReaderOutcome::new(move |environment| inner(environment).map_error(&function))
    }

    /// Continues with a computation chosen from the success payload, under
    /// the same environment. A failure skips `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::effect::ReaderOutcome;
    ///
    /// let threshold: ReaderOutcome<i32, String, i32> = ReaderOutcome::ask();
    /// let checked = threshold.flat_map(|limit| {
    ///     if limit > 0 {
    ///         ReaderOutcome::succeed(limit)
    ///     } else {
    ///         ReaderOutcome::fail("limit must be positive".to_string())
    ///     }
    /// });
    /// assert_eq!(checked.run(5), Outcome::Success(5));
    /// assert!(checked.run(0).is_failure());
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> ReaderOutcome<R, E, B>
    where
        F: Fn(A) -> ReaderOutcome<R, E, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let inner = self.run_function;
        ReaderOutcome::new(move |environment: R| match inner(environment.clone()) {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success(value) => function(value).run(environment),
        })
    }

    /// Alias for [`ReaderOutcome::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> ReaderOutcome<R, E, B>
    where
        F: Fn(A) -> ReaderOutcome<R, E, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Combines two computations, fail-fast left to right.
    ///
    /// `other` is not run when `self` fails.
    pub fn map2<B, C, F>(self, other: ReaderOutcome<R, E, B>, function: F) -> ReaderOutcome<R, E, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let left = self.run_function;
        let right = other.run_function;
        ReaderOutcome::new(move |environment: R| match left(environment.clone()) {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success(a) => right(environment).map(|b| function(a, b)),
        })
    }

    /// Pairs the results of two computations.
    #[must_use]
    pub fn product<B>(self, other: ReaderOutcome<R, E, B>) -> ReaderOutcome<R, E, (A, B)>
    where
        B: 'static,
        R: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Falls back to `fallback` when `self` fails.
    #[must_use]
    pub fn or_else(self, fallback: Self) -> Self
    where
        R: Clone,
    {
        let primary = self.run_function;
        let secondary = fallback.run_function;
        Self::new(move |environment: R| match primary(environment.clone()) {
            Outcome::Failure(_) => secondary(environment),
            success @ Outcome::Success(_) => success,
        })
    }

    /// Recovers from a failure with a computation chosen from the failure payload.
    pub fn recover_with<E2, F>(self, handler: F) -> ReaderOutcome<R, E2, A>
    where
        F: Fn(E) -> ReaderOutcome<R, E2, A> + 'static,
        E2: 'static,
        R: Clone,
    {
        let inner = self.run_function;
        ReaderOutcome::new(move |environment: R| match inner(environment.clone()) {
            Outcome::Failure(error) => handler(error).run(environment),
            Outcome::Success(value) => Outcome::Success(value),
        })
    }
}

impl<R, E> ReaderOutcome<R, E, R>
where
    R: Clone + 'static,
    E: 'static,
{
    /// Succeeds with the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(Outcome::Success)
    }
}

impl<R, E, B> ReaderOutcome<R, E, Vec<B>>
where
    R: Clone + 'static,
    E: 'static,
    B: 'static,
{
    /// Runs `function` over `items` left to right under one environment,
    /// stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::effect::ReaderOutcome;
    ///
    /// let scaled = ReaderOutcome::traverse_array(vec![1, 2, 3], |n: i32| {
    ///     ReaderOutcome::<i32, String, i32>::asks(move |factor| n * factor)
    /// });
    /// assert_eq!(scaled.run(10), Outcome::Success(vec![10, 20, 30]));
    /// ```
    pub fn traverse_array<T, F>(items: Vec<T>, function: F) -> Self
    where
        T: Clone + 'static,
        F: Fn(T) -> ReaderOutcome<R, E, B> + 'static,
    {
        Self::new(move |environment: R| {
            traverse_array(items.iter().cloned(), |item| {
                function(item).run(environment.clone())
            })
        })
    }

    /// Runs every computation left to right, stopping at the first failure.
    pub fn sequence_array(computations: Vec<ReaderOutcome<R, E, B>>) -> Self {
        Self::traverse_array(computations, |computation| computation)
    }
}

impl<R, E, A> Clone for ReaderOutcome<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, E, A> fmt::Display for ReaderOutcome<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<ReaderOutcome>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    #[derive(Clone)]
    struct Settings {
        retries: u32,
        name: &'static str,
    }

    fn settings() -> Settings {
        Settings {
            retries: 3,
            name: "svc",
        }
    }

    #[rstest]
    fn asks_projects_environment() {
        let retries: ReaderOutcome<Settings, String, u32> = ReaderOutcome::asks(|s: Settings| s.retries);
        assert_eq!(retries.run(settings()), Outcome::Success(3));
    }

    #[rstest]
    fn flat_map_shares_environment() {
        let name: ReaderOutcome<Settings, String, &'static str> = ReaderOutcome::asks(|s: Settings| s.name);
        let described = name.flat_map(|name| {
            ReaderOutcome::asks(move |s: Settings| format!("{name} x{}", s.retries))
        });
        assert_eq!(described.run(settings()), Outcome::Success("svc x3".to_string()));
    }

    #[rstest]
    fn flat_map_skips_continuation_after_failure() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let failing: ReaderOutcome<i32, &str, i32> = ReaderOutcome::fail("no");
        let chained = failing.flat_map(move |n| {
            *counter.borrow_mut() += 1;
            ReaderOutcome::succeed(n)
        });
        assert_eq!(chained.run(0), Outcome::Failure("no"));
        assert_eq!(*calls.borrow(), 0);
    }

    #[rstest]
    #[case(1, Outcome::Success(11))]
    #[case(-1, Outcome::Failure("negative environment".to_string()))]
    fn map2_is_fail_fast(#[case] environment: i32, #[case] expected: Outcome<String, i32>) {
        let checked: ReaderOutcome<i32, String, i32> = ReaderOutcome::new(|n| {
            if n < 0 {
                Outcome::fail("negative environment".to_string())
            } else {
                Outcome::succeed(n)
            }
        });
        let ten: ReaderOutcome<i32, String, i32> = ReaderOutcome::succeed(10);
        assert_eq!(checked.map2(ten, |a, b| a + b).run(environment), expected);
    }

    #[rstest]
    fn local_composes() {
        let base: ReaderOutcome<i32, (), i32> = ReaderOutcome::ask();
        let nested = ReaderOutcome::local(|n| n * 2, ReaderOutcome::local(|n| n + 1, base));
        assert_eq!(nested.run(5), Outcome::Success(11));
    }

    #[rstest]
    fn or_else_and_recover_with() {
        let failing: ReaderOutcome<i32, String, i32> = ReaderOutcome::fail("primary".to_string());
        let fallback: ReaderOutcome<i32, String, i32> = ReaderOutcome::ask();
        assert_eq!(failing.clone().or_else(fallback).run(4), Outcome::Success(4));

        let recovered: ReaderOutcome<i32, usize, i32> =
            failing.recover_with(|error| ReaderOutcome::fail(error.len()));
        assert_eq!(recovered.run(0), Outcome::Failure(7));
    }

    #[rstest]
    fn map_error_changes_failure_type() {
        let failing: ReaderOutcome<(), &str, i32> = ReaderOutcome::fail("abc");
        assert_eq!(failing.map_error(str::len).run(()), Outcome::Failure(3));
    }

    #[rstest]
    fn traverse_array_stops_at_first_failure() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&visited);
        let traversed = ReaderOutcome::traverse_array(vec![1, 2, 3, 4], move |n: i32| {
            log.borrow_mut().push(n);
            ReaderOutcome::<i32, String, i32>::new(move |limit| {
                if n < limit {
                    Outcome::succeed(n)
                } else {
                    Outcome::fail(format!("{n} reached {limit}"))
                }
            })
        });
        assert_eq!(traversed.run(2), Outcome::Failure("2 reached 2".to_string()));
        assert_eq!(*visited.borrow(), vec![1, 2]);
    }

    #[rstest]
    fn sequence_array_collects() {
        let readers: Vec<ReaderOutcome<i32, (), i32>> =
            vec![ReaderOutcome::ask(), ReaderOutcome::succeed(0), ReaderOutcome::asks(|n: i32| -n)];
        assert_eq!(ReaderOutcome::sequence_array(readers).run(7), Outcome::Success(vec![7, 0, -7]));
    }

    #[rstest]
    fn display_is_opaque() {
        let reader: ReaderOutcome<(), (), ()> = ReaderOutcome::succeed(());
        assert_eq!(reader.to_string(), "<ReaderOutcome>");
    }
}
