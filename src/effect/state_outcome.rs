//! `StateOutcome` - an outcome that threads a state value.
//!
//! A `StateOutcome<S, E, A>` wraps a transition `S -> Outcome<E, (A, S)>`.
//! Sequencing passes each step's final state to the next step. A failing
//! step ends the computation and its failure carries no state: the partial
//! state is discarded together with the rest of the chain.
//!
//! # Laws
//!
//! For every initial state `s`:
//!
//! - `m.fmap(|x| x).run(s) == m.run(s)`
//! - `StateOutcome::succeed(a).flat_map(f).run(s) == f(a).run(s)`
//! - `m.flat_map(StateOutcome::succeed).run(s) == m.run(s)`
//! - `StateOutcome::get().flat_map(StateOutcome::put).run(s) == StateOutcome::succeed(()).run(s)`
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::effect::StateOutcome;
//!
//! // Withdraw from a balance, failing instead of going negative.
//! fn withdraw(amount: u32) -> StateOutcome<u32, String, u32> {
//!     StateOutcome::new(move |balance: u32| match balance.checked_sub(amount) {
//!         Some(rest) => Outcome::succeed((amount, rest)),
//!         None => Outcome::fail(format!("cannot withdraw {amount} from {balance}")),
//!     })
//! }
//!
//! let both = withdraw(30).flat_map(|_| withdraw(50));
//! assert_eq!(both.run(100), Outcome::Success((50, 20)));
//! assert_eq!(both.run(60), Outcome::Failure("cannot withdraw 50 from 30".to_string()));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::Outcome;

/// A computation that threads a state `S` and succeeds with `A` or fails
/// with `E`.
pub struct StateOutcome<S, E, A>
where
    S: 'static,
    E: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> Outcome<E, (A, S)>>,
}

static_assertions::assert_not_impl_any!(StateOutcome<i32, String, i32>: Send, Sync);

impl<S, E, A> StateOutcome<S, E, A>
where
    S: 'static,
    E: 'static,
    A: 'static,
{
    /// Creates a `StateOutcome` from a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> Outcome<E, (A, S)> + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the computation from `initial_state`, returning the result and
    /// the final state.
    pub fn run(&self, initial_state: S) -> Outcome<E, (A, S)> {
        (self.transition)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> Outcome<E, A> {
        self.run(initial_state).map(|(value, _)| value)
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> Outcome<E, S> {
        self.run(initial_state).map(|(_, state)| state)
    }

    /// Succeeds with `value`, leaving the state unchanged.
    pub fn succeed(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Outcome::Success((value.clone(), state)))
    }

    /// Fails with `error`; the state is dropped.
    pub fn fail(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |_| Outcome::Failure(error.clone()))
    }

    /// Lifts a plain outcome, leaving the state unchanged on success.
    pub fn from_outcome(outcome: Outcome<E, A>) -> Self
    where
        E: Clone,
        A: Clone,
    {
        Self::new(move |state| outcome.clone().map(|value| (value, state)))
    }

    /// Succeeds with a projection of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::effect::StateOutcome;
    ///
    /// let size: StateOutcome<Vec<i32>, (), usize> = StateOutcome::gets(Vec::len);
    /// assert_eq!(size.run(vec![1, 2]), Outcome::Success((2, vec![1, 2])));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            Outcome::Success((value, state))
        })
    }

    /// Maps the success payload.
    pub fn fmap<B, F>(self, function: F) -> StateOutcome<S, E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        StateOutcome::new(move |state| {
            transition(state).map(|(value, next)| (function(value), next))
        })
    }

    /// Maps the failure payload.
    pub fn map_error<E2, F>(self, function: F) -> StateOutcome<S, E2, A>
    where
        F: Fn(E) -> E2 + 'static,
        E2: 'static,
    {
        let transition = self.transition;
        StateOutcome::new(move |state| transition(state).map_error(&function))
    }

    /// Continues with a computation chosen from the success payload, starting
    /// from the state this step left behind.
    pub fn flat_map<B, F>(self, function: F) -> StateOutcome<S, E, B>
    where
        F: Fn(A) -> StateOutcome<S, E, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        StateOutcome::new(move |state| match transition(state) {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success((value, next)) => function(value).run(next),
        })
    }

    /// Alias for [`StateOutcome::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> StateOutcome<S, E, B>
    where
        F: Fn(A) -> StateOutcome<S, E, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `self`, then `next` from the resulting state, keeping `next`'s result.
    #[must_use]
    pub fn then<B>(self, next: StateOutcome<S, E, B>) -> StateOutcome<S, E, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two computations run in sequence, fail-fast.
    pub fn map2<B, C, F>(self, other: StateOutcome<S, E, B>, function: F) -> StateOutcome<S, E, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        StateOutcome::new(move |state| match first(state) {
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Success((a, middle)) => {
                second(middle).map(|(b, last)| (function(a, b), last))
            }
        })
    }
}

impl<S, E> StateOutcome<S, E, S>
where
    S: Clone + 'static,
    E: 'static,
{
    /// Succeeds with a copy of the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| Outcome::Success((state.clone(), state)))
    }
}

impl<S, E> StateOutcome<S, E, ()>
where
    S: 'static,
    E: 'static,
{
    /// Replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| Outcome::Success(((), new_state.clone())))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| Outcome::Success(((), modifier(state))))
    }
}

impl<S, E, B> StateOutcome<S, E, Vec<B>>
where
    S: 'static,
    E: 'static,
    B: 'static,
{
    /// Runs `function` over `items` left to right, threading the state and
    /// stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use outcome::effect::StateOutcome;
    ///
    /// // Number each label with a running counter.
    /// let numbered = StateOutcome::traverse_array(vec!["a", "b"], |label: &'static str| {
    ///     StateOutcome::<u32, (), String>::new(move |n| Outcome::succeed((format!("{n}:{label}"), n + 1)))
    /// });
    /// assert_eq!(
    ///     numbered.run(1),
    ///     Outcome::Success((vec!["1:a".to_string(), "2:b".to_string()], 3)),
    /// );
    /// ```
    pub fn traverse_array<T, F>(items: Vec<T>, function: F) -> Self
    where
        T: Clone + 'static,
        F: Fn(T) -> StateOutcome<S, E, B> + 'static,
    {
        Self::new(move |initial_state| {
            let mut results = Vec::with_capacity(items.len());
            let mut state = initial_state;
            for item in items.iter().cloned() {
                match function(item).run(state) {
                    Outcome::Failure(error) => return Outcome::Failure(error),
                    Outcome::Success((value, next)) => {
                        results.push(value);
                        state = next;
                    }
                }
            }
            Outcome::Success((results, state))
        })
    }

    /// Runs every computation left to right, threading the state and
    /// stopping at the first failure.
    pub fn sequence_array(computations: Vec<StateOutcome<S, E, B>>) -> Self {
        Self::traverse_array(computations, |computation| computation)
    }
}

impl<S, E, A> Clone for StateOutcome<S, E, A>
where
    S: 'static,
    E: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, E, A> fmt::Display for StateOutcome<S, E, A>
where
    S: 'static,
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<StateOutcome>")
    }
}
