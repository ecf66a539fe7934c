//! Conversions between `Outcome` and the surrounding Rust world.
//!
//! - `Option` plays the role of a nullable value.
//! - `std::result::Result` converts losslessly in both directions.
//! - A panic is the one host-level failure that can be captured; only
//!   [`Outcome::try_catch`] does so.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::Outcome;

/// A panic captured by [`Outcome::try_catch`].
///
/// # Examples
///
/// ```rust
/// use outcome::PanicError;
///
/// let error = PanicError::new("index out of bounds");
/// assert_eq!(format!("{error}"), "panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    /// The panic message, or a placeholder for non-string payloads.
    pub message: String,
}

impl PanicError {
    /// Creates a `PanicError` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self { message }
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for PanicError {}

impl<E, A> Outcome<E, A> {
    /// Builds an outcome from an optional value, failing with `on_none`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from_nullable(Some(1), "none"), Outcome::Success(1));
    /// assert_eq!(Outcome::<&str, i32>::from_nullable(None, "none"), Outcome::Failure("none"));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>, on_none: E) -> Self {
        Self::from_option_with(value, || on_none)
    }

    /// Builds an outcome from an optional value, computing the failure lazily.
    #[inline]
    pub fn from_option_with<F>(value: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        value.map_or_else(|| Self::Failure(on_none()), Self::Success)
    }

    /// Builds an outcome from a std `Result`.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Runs `thunk`, converting a panic into a failure through `on_panic`.
    ///
    /// This is the only place in the crate where a host-level failure is
    /// intercepted. The default panic hook still runs and reports the panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let divided: Outcome<String, i32> = Outcome::try_catch(|| 10 / 2, |error| error.message);
    /// assert_eq!(divided, Outcome::Success(5));
    /// ```
    pub fn try_catch<T, F>(thunk: T, on_panic: F) -> Self
    where
        T: FnOnce() -> A,
        F: FnOnce(PanicError) -> E,
    {
        match panic::catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(on_panic(PanicError::from_payload(payload.as_ref()))),
        }
    }

    /// Wraps a function so that its panics become failures.
    pub fn try_catch_fn<X, T, F>(function: T, on_panic: F) -> impl Fn(X) -> Self
    where
        T: Fn(X) -> A,
        F: Fn(PanicError) -> E,
    {
        move |argument| Self::try_catch(|| function(argument), &on_panic)
    }

    /// Converts into an `Option`, discarding the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::succeed(1).to_option(), Some(1));
    /// assert_eq!(Outcome::<&str, i32>::fail("x").to_option(), None);
    /// ```
    #[inline]
    pub fn to_option(self) -> Option<A> {
        self.success()
    }

    /// Converts into a nullable value. In Rust this is the same as [`Outcome::to_option`].
    #[inline]
    pub fn to_nullable(self) -> Option<A> {
        self.to_option()
    }

    /// Converts into a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Failure(error) => Err(error),
            Self::Success(value) => Ok(value),
        }
    }
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        outcome.into_result()
    }
}
