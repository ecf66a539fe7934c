//! Traversal of ordered sequences with an `Outcome`-producing function.
//!
//! Elements are processed left to right. The first `Failure` stops the
//! traversal: later elements are never passed to the function, so side
//! effects in the function are not observed for them.

use super::Outcome;

/// Applies `function` to each element in order, collecting the successes.
///
/// Returns the first `Failure` produced; no element after it is evaluated.
/// An empty input yields `Success(vec![])`.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, traverse_array};
///
/// let non_empty = |s: &str| {
///     if s.is_empty() { Outcome::fail("empty") } else { Outcome::succeed(s.len()) }
/// };
///
/// assert_eq!(traverse_array(["a", "bb"], non_empty), Outcome::Success(vec![1, 2]));
/// assert_eq!(traverse_array(["a", ""], non_empty), Outcome::Failure("empty"));
/// ```
pub fn traverse_array<I, E, B, F>(items: I, mut function: F) -> Outcome<E, Vec<B>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Outcome<E, B>,
{
    traverse_array_with_index(items, |_, item| function(item))
}

/// Like [`traverse_array`], but the function also receives the element index.
pub fn traverse_array_with_index<I, E, B, F>(items: I, mut function: F) -> Outcome<E, Vec<B>>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> Outcome<E, B>,
{
    let mut collected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match function(index, item) {
            Outcome::Failure(error) => return Outcome::Failure(error),
            Outcome::Success(value) => collected.push(value),
        }
    }
    Outcome::Success(collected)
}

/// Turns a sequence of outcomes into an outcome of a sequence.
///
/// The first `Failure` in iteration order is returned; the iterator is not
/// advanced past it.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, sequence_array};
///
/// let all: Vec<Outcome<&str, i32>> = vec![Outcome::succeed(1), Outcome::succeed(2)];
/// assert_eq!(sequence_array(all), Outcome::Success(vec![1, 2]));
///
/// let some: Vec<Outcome<&str, i32>> = vec![Outcome::fail("a"), Outcome::fail("b")];
/// assert_eq!(sequence_array(some), Outcome::Failure("a"));
/// ```
pub fn sequence_array<I, E, A>(items: I) -> Outcome<E, Vec<A>>
where
    I: IntoIterator<Item = Outcome<E, A>>,
{
    traverse_array(items, |outcome| outcome)
}
