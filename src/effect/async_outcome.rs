//! `AsyncOutcome` - a deferred asynchronous computation settling to an `Outcome`.
//!
//! An `AsyncOutcome<E, A>` holds a thunk that creates a boxed `Send` future
//! when the computation is run. Nothing starts until it is awaited, so
//! composition decides exactly when each underlying future is created:
//!
//! - `flat_map` creates the continuation's future only after `self` has
//!   settled as a success;
//! - `traverse_array` creates element `i + 1`'s future only after element
//!   `i` has settled, and creates none after a failure.
//!
//! The executor that polls the future owns scheduling; this type never
//! spawns tasks.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::effect::AsyncOutcome;
//!
//! # futures::executor::block_on(async {
//! let fetched: AsyncOutcome<String, u32> = AsyncOutcome::new(|| async { Outcome::succeed(20) });
//! let doubled = fetched.fmap(|n| n * 2).flat_map(|n| AsyncOutcome::succeed(n + 2));
//!
//! assert_eq!(doubled.await, Outcome::Success(42));
//! # });
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::Outcome;

/// A deferred asynchronous computation producing `Outcome<E, A>`.
pub struct AsyncOutcome<E, A> {
    start: Box<dyn FnOnce() -> BoxFuture<'static, Outcome<E, A>> + Send>,
}

static_assertions::assert_impl_all!(AsyncOutcome<String, i32>: Send);

// =============================================================================
// Constructors
// =============================================================================

impl<E, A> AsyncOutcome<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Creates an `AsyncOutcome` from a closure producing the future.
    ///
    /// The closure runs when the computation is awaited, not before.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<E, A>> + Send + 'static,
    {
        Self {
            start: Box::new(move || action().boxed()),
        }
    }

    /// Wraps a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<E, A>> + Send + 'static,
    {
        Self {
            start: Box::new(move || future.boxed()),
        }
    }

    /// Lifts an already-settled outcome.
    pub fn from_outcome(outcome: Outcome<E, A>) -> Self {
        Self::from_future(futures::future::ready(outcome))
    }

    /// Settles immediately as a success.
    pub fn succeed(value: A) -> Self {
        Self::from_outcome(Outcome::Success(value))
    }

    /// Settles immediately as a failure.
    pub fn fail(error: E) -> Self {
        Self::from_outcome(Outcome::Failure(error))
    }

    /// Runs a future that cannot fail and treats its output as a success.
    pub fn from_infallible<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_future(future.map(Outcome::Success))
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<E, A> AsyncOutcome<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Starts the computation and waits for it to settle.
    pub async fn run_async(self) -> Outcome<E, A> {
        (self.start)().await
    }
}

impl<E, A> IntoFuture for AsyncOutcome<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    type Output = Outcome<E, A>;
    type IntoFuture = BoxFuture<'static, Outcome<E, A>>;

    fn into_future(self) -> Self::IntoFuture {
        (self.start)()
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<E, A> AsyncOutcome<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Maps the success payload.
    pub fn fmap<B, F>(self, function: F) -> AsyncOutcome<E, B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run_async().await.map(function) })
    }

    /// Maps the failure payload.
    pub fn map_error<E2, F>(self, function: F) -> AsyncOutcome<E2, A>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run_async().await.map_error(function) })
    }

    /// Continues with a computation chosen from the success payload.
    ///
    /// The continuation's future is created only after `self` has settled as
    /// a success.
    pub fn flat_map<B, F>(self, function: F) -> AsyncOutcome<E, B>
    where
        F: FnOnce(A) -> AsyncOutcome<E, B> + Send + 'static,
        B: Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run_async().await {
                Outcome::Failure(error) => Outcome::Failure(error),
                Outcome::Success(value) => function(value).run_async().await,
            }
        })
    }

    /// Alias for [`AsyncOutcome::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> AsyncOutcome<E, B>
    where
        F: FnOnce(A) -> AsyncOutcome<E, B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` after `self` succeeds, keeping `next`'s result.
    #[must_use]
    pub fn then<B>(self, next: AsyncOutcome<E, B>) -> AsyncOutcome<E, B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two computations, fail-fast left to right.
    ///
    /// `other` is started only after `self` has settled as a success.
    pub fn map2<B, C, F>(self, other: AsyncOutcome<E, B>, function: F) -> AsyncOutcome<E, C>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Falls back to `fallback` when `self` fails.
    #[must_use]
    pub fn or_else(self, fallback: Self) -> Self {
        self.recover_with(move |_| fallback)
    }

    /// Recovers from a failure with a computation chosen from the failure payload.
    pub fn recover_with<E2, F>(self, handler: F) -> AsyncOutcome<E2, A>
    where
        F: FnOnce(E) -> AsyncOutcome<E2, A> + Send + 'static,
        E2: Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run_async().await {
                Outcome::Failure(error) => handler(error).run_async().await,
                Outcome::Success(value) => Outcome::Success(value),
            }
        })
    }
}

// =============================================================================
// Array Traversal
// =============================================================================

impl<E, B> AsyncOutcome<E, Vec<B>>
where
    E: Send + 'static,
    B: Send + 'static,
{
    /// Runs `function` over `items` one element at a time, left to right,
    /// stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::effect::AsyncOutcome;
    ///
    /// # futures::executor::block_on(async {
    /// let checked = AsyncOutcome::traverse_array(vec![1, 2, 3], |n: i32| {
    ///     AsyncOutcome::<String, i32>::new(move || async move {
    ///         if n < 3 { Outcome::succeed(n * 10) } else { Outcome::fail(format!("{n} rejected")) }
    ///     })
    /// });
    /// assert_eq!(checked.await, Outcome::Failure("3 rejected".to_string()));
    /// # });
    /// ```
    pub fn traverse_array<I, F>(items: I, mut function: F) -> Self
    where
        I: IntoIterator + Send + 'static,
        I::IntoIter: Send,
        I::Item: Send,
        F: FnMut(I::Item) -> AsyncOutcome<E, B> + Send + 'static,
    {
        Self::new(move || async move {
            let mut results = Vec::new();
            for item in items {
                match function(item).run_async().await {
                    Outcome::Failure(error) => return Outcome::Failure(error),
                    Outcome::Success(value) => results.push(value),
                }
            }
            Outcome::Success(results)
        })
    }

    /// Awaits every computation in order, stopping at the first failure.
    pub fn sequence_array(computations: Vec<AsyncOutcome<E, B>>) -> Self {
        Self::traverse_array(computations, |computation| computation)
    }
}

impl<E, A> fmt::Display for AsyncOutcome<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<AsyncOutcome>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[rstest]
    #[tokio::test]
    async fn construction_is_lazy() {
        let started = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&started);
        let computation: AsyncOutcome<(), i32> = AsyncOutcome::new(move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Outcome::succeed(1)
        });
        assert_eq!(started.load(Ordering::SeqCst), 0);
        assert_eq!(computation.await, Outcome::Success(1));
        assert_eq!(started.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn flat_map_skips_continuation_after_failure() {
        let continued = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&continued);
        let failing: AsyncOutcome<&str, i32> = AsyncOutcome::fail("down");
        let result = failing
            .flat_map(move |n| {
                counter.fetch_add(1, Ordering::SeqCst);
                AsyncOutcome::succeed(n)
            })
            .await;
        assert_eq!(result, Outcome::Failure("down"));
        assert_eq!(continued.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn map_error_and_recover_with() {
        let failing: AsyncOutcome<&str, usize> = AsyncOutcome::fail("four");
        let mapped = failing.map_error(str::len);
        let recovered = mapped.recover_with(|length| AsyncOutcome::<(), usize>::succeed(length * 10));
        assert_eq!(recovered.await, Outcome::Success(40));
    }

    #[rstest]
    #[tokio::test]
    async fn or_else_keeps_first_success() {
        let primary: AsyncOutcome<&str, i32> = AsyncOutcome::succeed(1);
        let fallback: AsyncOutcome<&str, i32> = AsyncOutcome::succeed(2);
        assert_eq!(primary.or_else(fallback).await, Outcome::Success(1));
    }

    #[rstest]
    #[tokio::test]
    async fn map2_is_fail_fast() {
        let left: AsyncOutcome<&str, i32> = AsyncOutcome::fail("left");
        let right: AsyncOutcome<&str, i32> = AsyncOutcome::fail("right");
        assert_eq!(left.map2(right, |a, b| a + b).await, Outcome::Failure("left"));
    }

    #[rstest]
    #[tokio::test]
    async fn from_infallible_wraps_success() {
        let computation: AsyncOutcome<String, &str> = AsyncOutcome::from_infallible(async { "ready" });
        assert_eq!(computation.run_async().await, Outcome::Success("ready"));
    }

    #[rstest]
    fn display_is_opaque() {
        let computation: AsyncOutcome<(), ()> = AsyncOutcome::succeed(());
        assert_eq!(computation.to_string(), "<AsyncOutcome>");
    }
}
