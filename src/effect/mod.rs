//! `Outcome` lifted through outer effect contexts.
//!
//! Each type here wraps a computation whose final step produces an
//! [`Outcome`](crate::Outcome), and re-exposes the outcome algebra with the
//! outer context threaded through implicitly:
//!
//! - [`ReaderOutcome`]: reads a shared environment, then succeeds or fails
//! - [`StateOutcome`]: threads a state value, then succeeds or fails
//! - [`AsyncOutcome`]: settles asynchronously to an outcome (`async` feature)
//!
//! All of them short-circuit the same way `Outcome` does: once a step
//! fails, later steps are never run. Array traversal is sequential, so the
//! effect of element `i + 1` never starts before element `i` has settled,
//! and never starts at all if element `i` failed.
//!
//! # Do-Notation with `chain!`
//!
//! ```rust
//! use outcome::{Outcome, chain};
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     Outcome::from_result(input.parse::<i32>().map_err(|error| error.to_string()))
//! }
//!
//! let total = chain! {
//!     a <= parse("20");
//!     b <= parse("22");
//!     let sum = a + b;
//!     Outcome::succeed(sum)
//! };
//! assert_eq!(total, Outcome::Success(42));
//! ```
//!
//! # Reader example
//!
//! ```rust
//! use outcome::Outcome;
//! use outcome::effect::ReaderOutcome;
//!
//! #[derive(Clone)]
//! struct Limits {
//!     max_items: usize,
//! }
//!
//! fn check(count: usize) -> ReaderOutcome<Limits, String, usize> {
//!     ReaderOutcome::new(move |limits: Limits| {
//!         if count <= limits.max_items {
//!             Outcome::succeed(count)
//!         } else {
//!             Outcome::fail(format!("{count} exceeds {}", limits.max_items))
//!         }
//!     })
//! }
//!
//! let limits = Limits { max_items: 3 };
//! assert_eq!(check(2).run(limits.clone()), Outcome::Success(2));
//! assert!(check(5).run(limits).is_failure());
//! ```

// =============================================================================
// Lifted Outcomes
// =============================================================================

mod reader_outcome;
mod state_outcome;

pub use reader_outcome::ReaderOutcome;
pub use state_outcome::StateOutcome;

#[cfg(feature = "async")]
mod async_outcome;

#[cfg(feature = "async")]
pub use async_outcome::AsyncOutcome;

// =============================================================================
// Do-Notation Macro
// =============================================================================

mod chain_macro;
